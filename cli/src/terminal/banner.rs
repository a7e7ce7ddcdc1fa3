use colored::*;

use crate::terminal::print;

const BANNER: &str = r#"
          ____ _     ___ _   _ ___ ____
         / ___| |   |_ _| \ | |_ _/ ___|
        | |   | |    | ||  \| || | |
        | |___| |___ | || |\  || | |___
         \____|_____|___|_| \_|___\____|
"#;

pub fn print() {
    print::print(&format!("{}", BANNER.bright_cyan().bold()));
}
