use crate::cli::parser::Commands;
use crate::core::recommend::{pick, recommend, suggestions};
use crate::errors::AppResult;
use crate::models::Mood;
use crate::ui::messages::header;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Recommend { mood, all, random } = cmd {
        let mood = Mood::parse(mood);

        if *all {
            header(format!("Suggestions for {}", mood));
            for task in suggestions(&mood) {
                for (i, line) in textwrap::wrap(task, 72).iter().enumerate() {
                    let bullet = if i == 0 { "-" } else { " " };
                    println!("{bullet} {line}");
                }
            }
        } else if *random {
            println!("{}", pick(&mood, &mut rand::thread_rng()));
        } else {
            println!("{}", recommend(&mood));
        }
    }

    Ok(())
}
