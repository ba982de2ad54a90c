// File: ./src/cli.rs
//! Shared command-line interface logic, like printing help.
use crate::model::record::{Priority, ReminderLead, Status};
use strum::IntoEnumIterator;

pub fn print_help(binary_name: &str) {
    println!(
        "Avisame v{} - Spanish natural-language task command interpreter",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    {} [OPTIONS] <comando en español>", binary_name);
    println!("    {} --help", binary_name);
    println!();
    println!("OPTIONS:");
    println!("    -c, --config <path>   Use a specific configuration file.");
    println!("    -d, --decide          Also print the scheduling decision when the");
    println!("                          reminder is imminent (within the soon window).");
    println!("    -h, --help            Show this help message.");
    println!();
    println!("COMMAND SYNTAX:");
    println!("    <título> # <regla de fecha>     Explicit date clause after '#'");
    println!("    <frase libre>                   Date detected heuristically");
    println!();
    println!("RECOGNIZED DATE EXPRESSIONS:");
    println!("    pasado mañana [a las 5pm]       Day after tomorrow");
    println!("    mañana / hoy [a las 10am]       Tomorrow / today");
    println!("    el viernes [a las 3pm]          Next occurrence of a weekday");
    println!("    15 de marzo [de 2026]           Explicit date");
    println!("    en dos horas, en 10 minutos     Relative duration");
    println!("    a las 5[:30] [pm/de la tarde]   Time of day");
    println!();
    println!("METADATA KEYWORDS (removed from the title):");
    println!("    urgente, importante, prioridad alta/media/baja, luego");
    println!("    en proceso, hecho, terminado, pendiente");
    println!("    un día antes, una hora antes    Reminder lead");
    println!("    para la lista <nombre>          List label; items split on ',' and 'y'");
    println!();
    println!("STORE VALUES:");
    print!("    Prioridad:");
    for p in Priority::iter() {
        print!(" {}", p.store_name());
    }
    println!();
    print!("    Estado:");
    for s in Status::iter() {
        print!(" '{}'", s.store_name());
    }
    println!();
    print!("    Base del Registro:");
    for lead in ReminderLead::iter() {
        print!(" '{}'", lead.store_name());
    }
    println!();
    println!();
    println!("EXAMPLES:");
    println!("    {} \"Comprar pan # mañana a las 10am\"", binary_name);
    println!("    {} \"Reunión importante # el viernes a las 3pm\"", binary_name);
    println!("    {} -d \"avísame en media hora tomar pastilla\"", binary_name);
    println!("    {} \"Leche, pan y huevos para la lista Super\"", binary_name);
}
