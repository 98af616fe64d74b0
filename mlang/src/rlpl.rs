use std::io::Write;

use mlang_core::lexer::prelude::{Lexer, Token};

const PROMPT: &str = ">> ";

pub fn start() -> std::io::Result<()> {
	let stdin = std::io::stdin();

	loop {
		let mut input = String::from("");

		print!("{}", PROMPT);
		std::io::stdout().flush()?;
		if stdin.read_line(&mut input)? == 0 {
			return Ok(());
		}

		if let Some('\n') = input.chars().next_back() {
			input.pop();
		}
		if let Some('\r') = input.chars().next_back() {
			input.pop();
		}

		match input.as_str() {
			"" => {},
			".exit" => return Ok(()),
			_ => {
				let mut lexer = Lexer::new(input.char_indices().map(|(i, c)| (i as u32, c)));

				loop {
					match lexer.next_token() {
						Ok((_, token, _)) => {
							println!("{token}");

							if token == Token::Eof {
								break;
							}
						},
						Err(err) => {
							let (details, extra) = err.details();

							println!("[at {}] Lexical error: {}", err.location.start, details);
							if !extra.is_empty() {
								println!("{}", extra.join("\n"));
							}
							break;
						}
					}
				}
			}
		}
	}
}
