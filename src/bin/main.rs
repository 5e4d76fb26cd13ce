use std::io::{stdin, stdout, Write};
use wordplay_core::persistence::FileStore;
use wordplay_core::rounds::{generate_rush_round, shuffle_word};
use wordplay_core::Dictionary;

const DATA_DIR: &str = "wordplay_data";

fn main() {
    let mut dict = Dictionary::new(Box::new(FileStore::new(DATA_DIR)));
    if dict.load() {
        println!("Loaded {} words from disk.", dict.len());
    } else {
        println!("Starting with an empty dictionary.");
    }

    println!("Wordplay trainer. Commands: add <text>, del <word>, list, count,");
    println!("scramble, rush, reset, exit.");
    println!("----------------------------------------------------------------");

    loop {
        print!("> ");
        let _ = stdout().flush();
        let mut input = String::new();
        if stdin().read_line(&mut input).is_err() {
            break;
        }
        let line = input.trim();
        let (cmd, rest) = match line.split_once(' ') {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (line, ""),
        };

        match cmd {
            "exit" => break,
            "add" => {
                let count = dict.add_words(rest);
                println!("Added {} word(s). Dictionary size: {}", count, dict.len());
            }
            "del" => {
                if dict.delete_word(rest) {
                    println!("Removed '{}'.", rest.to_lowercase());
                } else {
                    println!("'{}' is not in the dictionary.", rest.to_lowercase());
                }
            }
            "list" => {
                let mut words = dict.all_words();
                words.sort();
                println!("{}", words.join(" "));
            }
            "count" => println!("{} word(s) stored.", dict.len()),
            "scramble" => play_scramble(&dict),
            "rush" => play_rush(&dict),
            "reset" => {
                dict.reset();
                println!("Dictionary cleared.");
            }
            "" => {}
            _ => println!("Unknown command: '{cmd}'"),
        }
    }

    println!("Bye.");
}

fn play_scramble(dict: &Dictionary) {
    let word = dict.random_word();
    println!("Unscramble this: {}", shuffle_word(&word));
    let answer = read_answer();
    if answer.eq_ignore_ascii_case(&word) {
        println!("Correct!");
    } else {
        println!("It was '{word}'.");
    }
}

fn play_rush(dict: &Dictionary) {
    let round = generate_rush_round(dict);
    println!("Real word or fake? {}  (y = real, n = fake)", round.word);
    let answer = read_answer();
    let guessed_real = answer.eq_ignore_ascii_case("y");
    if guessed_real == round.is_real {
        println!("Correct!");
    } else if round.is_real {
        println!("It was real.");
    } else {
        println!("It was fake.");
    }
}

fn read_answer() -> String {
    let mut input = String::new();
    let _ = stdin().read_line(&mut input);
    input.trim().to_string()
}
