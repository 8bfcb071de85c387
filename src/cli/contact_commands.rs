use crate::cli::context::CLIContext;
use crate::ops::contact_ops;
use crate::queries::*;

pub fn list(ctx: &CLIContext) {
    let contacts = ctx.session.store.contacts();
    if contacts.is_empty() {
        println!("No contacts yet. Use 'add-contact' to add someone.");
        return;
    }

    println!("Contacts ({}):", contacts.len());
    println!();
    for contact in contacts {
        println!("{}", contact);
    }
}

pub fn add(ctx: &mut CLIContext, args: &str) {
    let name = if !args.is_empty() {
        args.to_string()
    } else {
        match ctx.prompt("Name: ") {
            Some(s) => s,
            None => return,
        }
    };
    let group = match ctx.prompt("Group: ") {
        Some(s) => s,
        None => return,
    };
    let phone = ctx.prompt("Phone number (optional): ").unwrap_or_default();
    let phone_opt = if phone.is_empty() { None } else { Some(phone.as_str()) };

    match contact_ops::add_contact(&mut ctx.session.store, &name, &group, phone_opt) {
        Ok(_) => println!("Added {}", name.trim()),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn add_phone(ctx: &mut CLIContext, args: &str) {
    if args.is_empty() {
        println!("Usage: add-phone <name>");
        return;
    }
    let contact_id = match ctx.find_contact(args) {
        Some(id) => id,
        None => return,
    };
    let number = match ctx.prompt("Phone number: ") {
        Some(s) => s,
        None => return,
    };

    match contact_ops::add_phone(&mut ctx.session.store, contact_id, &number) {
        Ok(()) => println!("Phone number added."),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn show(ctx: &CLIContext, args: &str) {
    if args.is_empty() {
        println!("Usage: show <name>");
        return;
    }
    let contact_id = match ctx.find_contact(args) {
        Some(id) => id,
        None => return,
    };
    let store = &ctx.session.store;
    let Some(contact) = store.contact(contact_id) else {
        return;
    };

    println!("{}", contact);
    let reminders = reminder_queries::reminders_for(store, contact_id);
    if !reminders.is_empty() {
        println!("Reminders:");
        for r in reminders {
            println!("  {} ({})", r.title, r.time);
        }
    }
}

pub fn find(ctx: &CLIContext, args: &str) {
    if args.is_empty() {
        println!("Usage: find <query>");
        return;
    }
    let matches = contact_queries::search_by_name(&ctx.session.store, args);
    if matches.is_empty() {
        println!("No contacts match '{}'", args);
        return;
    }
    for contact in matches {
        println!("  {} [{}]", contact.name, contact.group);
    }
}

pub fn group(ctx: &CLIContext, args: &str) {
    if args.is_empty() {
        println!("Usage: group <group>");
        return;
    }
    let members = contact_queries::in_group(&ctx.session.store, args);
    if members.is_empty() {
        println!("No contacts in group '{}'", args);
        return;
    }
    for contact in members {
        println!("  {}", contact.name);
    }
}
