use std::{cell::RefCell, io::Write, rc::Rc};

use mlang_core::{
	environment::prelude::Environment,
	eval::eval_program,
	parser::prelude::parse_source
};

const PROMPT: &str = ">> ";

pub fn start() -> std::io::Result<()> {
	let stdin = std::io::stdin();
	let env = Rc::new(RefCell::new(Environment::new()));

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
				let parsed = parse_source(&input);

				if !parsed.errors.is_empty() {
					let messages = parsed.errors.iter()
						.map(|err| err.message())
						.collect::<Vec<String>>();

					println!("Errors:");
					println!("  parser errors:\n      {}", messages.join("\n      "));
					continue;
				}

				let evaluated = eval_program(&parsed.program, &env);
				println!("{evaluated}");
			}
		}
	}
}
