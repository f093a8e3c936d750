//! The `formforge init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create formforge.toml
    if std::path::Path::new("formforge.toml").exists() {
        println!("formforge.toml already exists, skipping.");
    } else {
        std::fs::write("formforge.toml", SAMPLE_CONFIG)?;
        println!("Created formforge.toml");
    }

    // Create example form draft
    std::fs::create_dir_all("forms")?;
    let example_path = std::path::Path::new("forms/example.json");
    if example_path.exists() {
        println!("forms/example.json already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_FORM)?;
        println!("Created forms/example.json");
    }

    println!("\nNext steps:");
    println!("  1. Run: formforge validate --form forms/example.json");
    println!("  2. Run: formforge create --form forms/example.json");
    println!("  3. Run: formforge list");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# formforge configuration

data_file = "./formforge-data.json"
output_dir = "./formforge-reports"
"#;

const EXAMPLE_FORM: &str = r#"{
  "title": "Example Quiz",
  "description": "A small quiz covering all three question kinds",
  "questions": [
    {
      "title": "Sort the animals",
      "kind": "categorize",
      "data": {
        "categories": ["Mammals", "Birds"],
        "items": ["Dolphin", "Eagle", "Bat", "Penguin"]
      }
    },
    {
      "title": "Complete the sentence",
      "kind": "cloze",
      "data": {
        "text": "The quick brown ___ jumps over the lazy ___.",
        "blanks": ["fox", "dog"]
      }
    },
    {
      "title": "About the passage",
      "kind": "comprehension",
      "data": {
        "passage": "Rust is a systems programming language focused on safety and speed.",
        "sub_questions": [
          {
            "prompt": "What does Rust focus on?",
            "options": [
              "Safety and speed",
              "Garbage collection",
              "Dynamic typing",
              "Virtual machines"
            ],
            "correct_index": 0
          }
        ]
      }
    }
  ]
}
"#;
