pub mod context;
pub mod contact_commands;
pub mod reminder_commands;

use std::path::Path;

use crate::persist::json_export;
use crate::session::{Session, SessionConfig};
use context::CLIContext;

/// Run the interactive REPL. The notebook is loaded first and saved on exit.
pub fn run(config: SessionConfig) {
    println!("Notebook");
    println!("Type 'help' for commands, 'exit' to quit.");
    println!();

    let session = match Session::start(config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error loading notebook: {}", e);
            return;
        }
    };
    println!(
        "{} contacts, {} reminders ({})",
        session.store.contacts().len(),
        session.store.reminders().len(),
        session.data_path().display()
    );

    let mut ctx = CLIContext::new(session);
    repl_loop(&mut ctx);

    let path = ctx.session.data_path().display().to_string();
    match ctx.session.shutdown() {
        Ok(()) => println!("Saved to {}", path),
        Err(e) => eprintln!("Error saving notebook: {}", e),
    }
}

fn repl_loop(ctx: &mut CLIContext) {
    loop {
        let input = match ctx.read_line("> ") {
            Some(s) => s,
            None => break,
        };

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let (command, args) = parse_command(input);

        match command {
            "help" | "?" => print_help(),
            "quit" | "exit" | "q" => break,

            // Contact commands
            "contacts" | "list" | "ls" => contact_commands::list(ctx),
            "add-contact" => contact_commands::add(ctx, args),
            "add-phone" => contact_commands::add_phone(ctx, args),
            "show" => contact_commands::show(ctx, args),
            "find" => contact_commands::find(ctx, args),
            "group" => contact_commands::group(ctx, args),

            // Reminder commands
            "reminders" => reminder_commands::list(ctx),
            "add-reminder" => reminder_commands::add(ctx, args),

            // Persistence
            "save" => match ctx.session.save() {
                Ok(()) => println!("Saved to {}", ctx.session.data_path().display()),
                Err(e) => ctx.print_error(&e),
            },
            "export" => export(ctx, args),

            _ => println!("Unknown command: {}. Type 'help' for commands.", command),
        }
    }
}

fn export(ctx: &CLIContext, args: &str) {
    if args.is_empty() {
        println!("Usage: export <path>");
        return;
    }
    match json_export::export_json(&ctx.session.store, Path::new(args)) {
        Ok(()) => println!("Exported to {}", args),
        Err(e) => ctx.print_error(&e),
    }
}

/// Split input into command and the rest of the line.
fn parse_command(input: &str) -> (&str, &str) {
    let input = input.trim();
    match input.find(|c: char| c == ' ' || c == '\t') {
        Some(pos) => (&input[..pos], input[pos..].trim()),
        None => (input, ""),
    }
}

fn print_help() {
    println!(r#"
COMMANDS:

  Contacts:
    contacts                List all contacts
    add-contact [name]      Add a contact (prompts for group and phone)
    add-phone <name>        Add a phone number to a contact
    show <name>             Show a contact and its reminders
    find <query>            Search contacts by name
    group <group>           List contacts in a group

  Reminders:
    reminders               List all reminders
    add-reminder [title]    Add a reminder (prompts for time, explanation, contacts)

  Other:
    save                    Save the notebook now
    export <path>           Write the notebook as JSON
    help                    Show this help
    exit / quit / q         Save and exit

TIPS:
  - Names are case-insensitive and partial matches work
  - The notebook is saved automatically on exit"#);
}
