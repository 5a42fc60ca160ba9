// Interactive feedback collection loop

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::engine::Engine;

pub async fn run(engine: &Engine) -> Result<()> {
    let mut editor = DefaultEditor::new()?;

    println!("Describe the conversation and pick the best reply.");
    println!("Type 'exit' (or Ctrl-D) to quit.\n");

    loop {
        let line = match editor.readline("context> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input == "exit" || input == "quit" {
            break;
        }
        let _ = editor.add_history_entry(input);

        let category = match engine.classify(input) {
            Ok(category) => category,
            Err(e) => {
                eprintln!("✗ {}", e);
                continue;
            }
        };

        let candidates = engine.generate(category, engine.config().candidate_count);
        println!("Category: {}", category);
        for (i, candidate) in candidates.iter().enumerate() {
            println!("  {}. {}", i + 1, candidate);
        }

        let Some(chosen) = pick_candidate(&mut editor, &candidates)? else {
            println!("Skipped.");
            continue;
        };

        match engine.record(input, &candidates, chosen).await {
            Ok(record) => println!("✓ Feedback saved (record #{})\n", record.sequence),
            Err(e) => eprintln!("✗ Failed to save feedback: {}\n", e),
        }
    }

    println!("Bye!");
    Ok(())
}

/// Ask for a 1-based pick; empty input skips the round.
fn pick_candidate<'a>(
    editor: &mut DefaultEditor,
    candidates: &'a [String],
) -> Result<Option<&'a str>> {
    loop {
        let prompt = format!("best (1-{}, empty to skip)> ", candidates.len());
        let line = match editor.readline(&prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let input = line.trim();
        if input.is_empty() {
            return Ok(None);
        }

        match input.parse::<usize>() {
            Ok(n) if (1..=candidates.len()).contains(&n) => {
                return Ok(Some(&candidates[n - 1]));
            }
            _ => {
                println!(
                    "Invalid choice. Enter a number between 1 and {}.",
                    candidates.len()
                );
            }
        }
    }
}
