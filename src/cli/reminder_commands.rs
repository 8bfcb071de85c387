use crate::cli::context::CLIContext;
use crate::model::*;
use crate::ops::reminder_ops;
use crate::queries::reminder_queries;

pub fn list(ctx: &CLIContext) {
    let store = &ctx.session.store;
    let reminders = store.reminders();
    if reminders.is_empty() {
        println!("No reminders yet. Use 'add-reminder' to create one.");
        return;
    }

    for reminder in reminders {
        let names: Vec<&str> = reminder_queries::related_contacts(store, reminder)
            .into_iter()
            .map(|c| c.name.as_str())
            .collect();
        println!("Title: {}", reminder.title);
        println!("Time: {}", reminder.time);
        println!("Explanation: {}", reminder.explanation);
        println!("Related Contacts: {}", names.join(" "));
        println!();
    }
}

pub fn add(ctx: &mut CLIContext, args: &str) {
    let title = if !args.is_empty() {
        args.to_string()
    } else {
        match ctx.prompt("Title: ") {
            Some(s) => s,
            None => return,
        }
    };
    let time = match ctx.prompt("Time: ") {
        Some(s) => s,
        None => return,
    };
    let explanation = ctx.prompt("Explanation (optional): ").unwrap_or_default();

    let related_input = ctx
        .prompt("Related contacts (comma-separated, optional): ")
        .unwrap_or_default();
    let mut related: Vec<Id<Contact>> = Vec::new();
    for name in related_input.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        match ctx.find_contact(name) {
            Some(id) => related.push(id),
            None => {
                println!("Reminder not added.");
                return;
            }
        }
    }

    match reminder_ops::add_reminder(&mut ctx.session.store, &title, &time, &explanation, &related) {
        Ok(_) => println!("Added reminder '{}'", title.trim()),
        Err(e) => ctx.print_error(&e),
    }
}
