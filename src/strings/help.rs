//! # Help Text
//!
//! Menu printed by the `generate` tool for `-h`, `--help`, or an unknown command.

pub const MENU: &str = concat!(
    "Welcome to code generator!\n",
    "\n",
    "Usage: generate [command]\n",
    "\n",
    "Available commands:\n",
    "   c, component \t Generates brand new component\n",
    "  -h, --help    \t To see all available commands\n",
    "\n",
    "Options:\n",
    "      --force   \t Overwrite an existing component\n",
);
