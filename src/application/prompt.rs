//! # Prompt Engine
//!
//! Asks an ordered list of questions one at a time over a [`PromptChannel`] and
//! returns the completed [`AnswerSet`]. The channel is owned by the session and is
//! closed on every exit path, including failures.

use crate::domain::error::{ScaffoldError, ScaffoldResult};
use crate::domain::traits::PromptChannel;
use crate::domain::types::{AnswerSet, Question};
use std::collections::HashSet;

/// Runs one prompt session.
///
/// Fails with [`ScaffoldError::PromptAborted`] when the input ends before the last
/// question is answered; a partial answer set is never returned.
pub async fn prompt<C>(questions: &[Question], mut channel: C) -> ScaffoldResult<AnswerSet>
where
    C: PromptChannel,
{
    let outcome = match validate(questions) {
        Ok(()) => ask_all(questions, &mut channel).await,
        Err(e) => Err(e),
    };

    let closed = channel.close().await;
    let answers = outcome?;
    closed?;
    Ok(answers)
}

fn validate(questions: &[Question]) -> ScaffoldResult<()> {
    if questions.is_empty() {
        return Err(ScaffoldError::InvalidQuestionSet(
            "at least one question is required".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for question in questions {
        if !seen.insert(question.name.as_str()) {
            return Err(ScaffoldError::InvalidQuestionSet(format!(
                "duplicate question name '{}'",
                question.name
            )));
        }
    }
    Ok(())
}

async fn ask_all<C>(questions: &[Question], channel: &mut C) -> ScaffoldResult<AnswerSet>
where
    C: PromptChannel,
{
    let mut answers = AnswerSet::with_capacity(questions.len());

    for question in questions {
        channel.write_prompt(&question.render()).await?;

        let line = channel
            .read_line()
            .await?
            .ok_or_else(|| ScaffoldError::PromptAborted(question.name.clone()))?;

        let answer = question.resolve(&line);
        tracing::debug!("{}", crate::strings::logs::answer_recorded(&question.name, answer.as_deref()));
        answers.record(&question.name, answer);
    }

    Ok(answers)
}
