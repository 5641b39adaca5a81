mod render;
pub mod shell;

use bookshelf::api::CmdResult;

pub use render::{render_messages, render_records};

pub fn print_result(result: &CmdResult) {
    if !result.listed_records.is_empty() {
        print!("{}", render_records(&result.listed_records));
    }
    if let Some(config) = &result.config {
        for (key, value) in config.entries() {
            println!("{} = {}", key, value);
        }
    }
    print!("{}", render_messages(&result.messages));
}
