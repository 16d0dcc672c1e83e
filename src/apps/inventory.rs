// 📦 Inventory App - seed, save, then reload in a fresh session

use crate::entities::InventoryItem;
use crate::persistence::InventoryLogger;
use anyhow::Result;
use chrono::{Duration, Utc};
use std::io::Write;
use std::path::Path;

pub const DEFAULT_DATA_FILE: &str = "inventory.json";

pub struct InventoryApp {
    logger: InventoryLogger<InventoryItem>,
}

impl InventoryApp {
    pub fn new<P: AsRef<Path>>(data_file: P) -> Self {
        InventoryApp {
            logger: InventoryLogger::new(data_file),
        }
    }

    pub fn items(&self) -> &[InventoryItem] {
        self.logger.all()
    }

    pub fn seed_sample_data<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let now = Utc::now();
        let seed = [
            (1, "Laptop", 10, 30),
            (2, "Monitor", 15, 15),
            (3, "Keyboard", 25, 7),
            (4, "Mouse", 50, 3),
            (5, "Headphones", 20, 0),
        ];

        for (id, name, quantity, days_ago) in seed {
            let item = InventoryItem::new(id, name, quantity, now - Duration::days(days_ago));
            writeln!(out, "Added item: {} ({} units)", item.name, item.quantity)?;
            self.logger.add(item);
        }
        Ok(())
    }

    pub fn save_data<W: Write>(&self, out: &mut W) -> Result<()> {
        match self.logger.save_to_file() {
            Ok(count) => writeln!(
                out,
                "Successfully saved {} items to {}",
                count,
                self.logger.file_path().display()
            )?,
            Err(e) => writeln!(out, "Error saving to file: {}", e)?,
        }
        Ok(())
    }

    pub fn load_data<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let existed = self.logger.file_path().exists();

        match self.logger.load_from_file() {
            Ok(_) if !existed => writeln!(
                out,
                "No existing data file found. Starting with empty inventory."
            )?,
            Ok(count) => writeln!(
                out,
                "Successfully loaded {} items from {}",
                count,
                self.logger.file_path().display()
            )?,
            Err(e) => writeln!(out, "Error loading from file: {}", e)?,
        }
        Ok(())
    }

    pub fn print_all_items<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Current Inventory:")?;
        writeln!(out, "------------------")?;

        if self.logger.is_empty() {
            writeln!(out, "No items in inventory.")?;
            return Ok(());
        }

        for item in self.logger.all() {
            writeln!(
                out,
                "ID: {}, Name: {}, Quantity: {}, Added: {}",
                item.id,
                item.name,
                item.quantity,
                item.date_added.format("%Y-%m-%d")
            )?;
        }
        Ok(())
    }

    /// Session 1 seeds and saves; session 2 is a fresh app that loads and prints
    pub fn run<W: Write, P: AsRef<Path>>(data_file: P, out: &mut W) -> Result<()> {
        writeln!(out, "=== Session 1: Creating and Saving Data ===")?;
        let mut first = InventoryApp::new(&data_file);
        first.seed_sample_data(out)?;
        first.save_data(out)?;

        writeln!(out, "\n=== Session 2: Loading and Displaying Data ===")?;
        let mut second = InventoryApp::new(&data_file);
        second.load_data(out)?;
        second.print_all_items(out)
    }
}
