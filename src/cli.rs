use crate::common::config::DEFAULT_SLOT_COUNT;
use crate::common::logger::initialize_logger;
use crate::container::probe_table::{Placement, ProbeTable};
use crate::storage::record::ProductRecord;
use clap::Parser;
use colored::*;
use rustyline::DefaultEditor;
use std::error::Error;
use std::str::FromStr;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of slots in the inventory table
    #[arg(short, long)]
    capacity: Option<usize>,
}

fn parse_number<T: FromStr>(value: &str, what: &str) -> Result<T, Box<dyn Error>> {
    value
        .parse()
        .map_err(|_| format!("{} must be a number, got '{}'", what, value).into())
}

struct InventoryCommandExecutor {
    table: ProbeTable,
}

impl InventoryCommandExecutor {
    fn new(table: ProbeTable) -> Self {
        Self { table }
    }

    fn execute_command(&mut self, command: &str) -> Result<(), Box<dyn Error>> {
        let mut parts = command.split_whitespace();
        let keyword = match parts.next() {
            Some(keyword) => keyword.to_lowercase(),
            None => return Ok(()),
        };
        let args: Vec<&str> = parts.collect();

        match keyword.as_str() {
            "insert" => self.handle_insert(&args)?,
            "remove" => self.handle_remove(&args)?,
            "search" => self.handle_search(&args)?,
            "update" => self.handle_update(&args)?,
            "restock" => self.handle_restock(&args)?,
            "show" => self.handle_show(),
            "help" => self.display_help(),
            _ => return Err(format!("unknown command '{}', try 'help'", keyword).into()),
        }

        Ok(())
    }

    fn handle_insert(&mut self, args: &[&str]) -> Result<(), Box<dyn Error>> {
        if args.len() != 3 {
            return Err("usage: insert <code> <stock> <price>".into());
        }
        let record = ProductRecord::new(
            parse_number(args[0], "code")?,
            parse_number(args[1], "stock")?,
            parse_number(args[2], "price")?,
        );

        match self.table.insert(record)? {
            Placement::Home(slot) => {
                println!("{}", format!("inserted at home slot {}", slot).green());
            }
            Placement::Probed { home, slot } => {
                println!(
                    "{}",
                    format!("collision at slot {}, placed at slot {}", home, slot).yellow()
                );
            }
        }
        Ok(())
    }

    fn handle_remove(&mut self, args: &[&str]) -> Result<(), Box<dyn Error>> {
        if args.len() != 1 {
            return Err("usage: remove <code>".into());
        }
        let (slot, record) = self.table.remove(parse_number(args[0], "code")?)?;
        println!("removed from slot {}: {}", slot, record);
        Ok(())
    }

    fn handle_search(&self, args: &[&str]) -> Result<(), Box<dyn Error>> {
        if args.len() != 1 {
            return Err("usage: search <code>".into());
        }
        let (slot, record) = self.table.search(parse_number(args[0], "code")?)?;
        println!("found at slot {}: {}", slot, record);
        Ok(())
    }

    fn handle_update(&mut self, args: &[&str]) -> Result<(), Box<dyn Error>> {
        if args.len() != 3 {
            return Err("usage: update <code> <stock> <price>".into());
        }
        let slot = self.table.update(
            parse_number(args[0], "code")?,
            parse_number(args[1], "stock")?,
            parse_number(args[2], "price")?,
        )?;
        println!("updated record at slot {}", slot);
        Ok(())
    }

    fn handle_restock(&mut self, args: &[&str]) -> Result<(), Box<dyn Error>> {
        if args.len() != 2 {
            return Err("usage: restock <code> <delta>".into());
        }
        let (slot, new_stock) = self.table.restock(
            parse_number(args[0], "code")?,
            parse_number(args[1], "delta")?,
        )?;
        println!("slot {} now holds {} units", slot, new_stock);
        Ok(())
    }

    fn handle_show(&self) {
        print!("{:<6}", "Slot".bold());
        print!("{:<10}", "Code".bold());
        print!("{:<10}", "Stock".bold());
        print!("{:<10}", "Price".bold());
        println!();

        for (index, slot) in self.table.iter() {
            match slot.record() {
                Some(record) => println!(
                    "{:<6}{:<10}{:<10}{:<10.2}",
                    index,
                    record.get_code(),
                    record.get_stock(),
                    record.get_price()
                ),
                None => println!("{:<6}{:<10}{:<10}{:<10}", index, "-", "-", "-"),
            }
        }

        println!(
            "{} of {} slots occupied\n",
            self.table.len(),
            self.table.capacity()
        );
    }

    fn display_help(&self) {
        println!("\n{}", "Available Commands:".bold());
        println!("  insert <code> <stock> <price>  - Store a new product");
        println!("  remove <code>                  - Delete a product");
        println!("  search <code>                  - Look a product up");
        println!("  update <code> <stock> <price>  - Overwrite stock and price");
        println!("  restock <code> <delta>         - Adjust stock by delta");
        println!("  show                           - Display every slot");
        println!("  help                           - Show this help message");
        println!("  exit                           - Leave the console\n");
    }
}

pub fn run_cli() -> Result<(), Box<dyn Error>> {
    initialize_logger();
    let args = Args::parse();

    let capacity = args.capacity.unwrap_or(DEFAULT_SLOT_COUNT);
    let table = ProbeTable::new(capacity)?;

    println!("{}", "\nStockroom Inventory Console".blue().bold());
    println!("{} slots, type 'help' for commands\n", capacity);

    let mut executor = InventoryCommandExecutor::new(table);

    let mut rl = DefaultEditor::new()?;
    if rl.load_history("history.txt").is_err() {
        println!("{}", "No previous history.".yellow());
    }

    loop {
        match rl.readline("stock> ") {
            Ok(line) => {
                let command = line.trim();
                if command.is_empty() {
                    continue;
                }

                rl.add_history_entry(command)?;

                if command == "exit" {
                    println!("Shutting down...");
                    break;
                }

                match executor.execute_command(command) {
                    Ok(_) => {}
                    Err(e) => println!("{}", format!("Error: {}", e).red()),
                }
            }
            Err(err) => {
                println!("Error: {}", err);
                break;
            }
        }
    }

    rl.save_history("history.txt")?;
    Ok(())
}
