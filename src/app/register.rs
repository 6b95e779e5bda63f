// SPDX-License-Identifier: MPL-2.0
//! Lines of the sale being rung up on the register screen.

use crate::error::{Error, Result};
use std::fmt;

/// Products offered by the "Add item" button, cycled in order.
const CATALOG: &[(&str, u32)] = &[
    ("Jack Daniels 750ml", 2499),
    ("Grey Goose 750ml", 3999),
    ("Corona Extra 12pk", 1699),
    ("Heineken 12pk", 1799),
    ("Tito's Handmade Vodka 750ml", 2499),
];

/// Identifier of a line on the current sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineId(u32);

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaleLine {
    pub id: LineId,
    pub name: String,
    pub price_cents: u32,
}

/// The open sale.
#[derive(Debug, Default)]
pub struct Register {
    lines: Vec<SaleLine>,
    next_id: u32,
    next_product: usize,
}

impl Register {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the next catalog product and returns its line.
    pub fn add_next(&mut self) -> &SaleLine {
        let (name, price_cents) = CATALOG[self.next_product % CATALOG.len()];
        self.next_product += 1;
        self.push(name, price_cents)
    }

    pub fn push(&mut self, name: impl Into<String>, price_cents: u32) -> &SaleLine {
        self.next_id += 1;
        self.lines.push(SaleLine {
            id: LineId(self.next_id),
            name: name.into(),
            price_cents,
        });
        &self.lines[self.lines.len() - 1]
    }

    /// Removes a line. Fails if the line is no longer on the sale.
    pub fn remove(&mut self, id: LineId) -> Result<SaleLine> {
        let pos = self
            .lines
            .iter()
            .position(|line| line.id == id)
            .ok_or_else(|| Error::Action(format!("line {id} is no longer on the sale")))?;
        Ok(self.lines.remove(pos))
    }

    /// Empties the sale, returning the number of lines dropped.
    pub fn clear(&mut self) -> usize {
        let count = self.lines.len();
        self.lines.clear();
        count
    }

    #[must_use]
    pub fn line(&self, id: LineId) -> Option<&SaleLine> {
        self.lines.iter().find(|line| line.id == id)
    }

    #[must_use]
    pub fn lines(&self) -> &[SaleLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub fn total_cents(&self) -> u32 {
        self.lines.iter().map(|line| line.price_cents).sum()
    }
}

/// Formats an amount in cents as dollars, e.g. `$24.99`.
#[must_use]
pub fn format_money(cents: u32) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_next_cycles_through_catalog() {
        let mut register = Register::new();
        let names: Vec<String> = (0..CATALOG.len() + 1)
            .map(|_| register.add_next().name.clone())
            .collect();
        assert_eq!(names[0], CATALOG[0].0);
        assert_eq!(names[CATALOG.len()], CATALOG[0].0);
    }

    #[test]
    fn remove_missing_line_is_an_action_error() {
        let mut register = Register::new();
        let id = register.push("Jim Beam 1L", 1999).id;
        assert!(register.remove(id).is_ok());
        assert!(matches!(register.remove(id), Err(Error::Action(_))));
    }

    #[test]
    fn total_sums_lines() {
        let mut register = Register::new();
        register.push("A", 1999);
        register.push("B", 501);
        assert_eq!(register.total_cents(), 2500);
        assert_eq!(format_money(register.total_cents()), "$25.00");
        assert_eq!(register.clear(), 2);
        assert!(register.is_empty());
    }

    #[test]
    fn format_money_pads_cents() {
        assert_eq!(format_money(5), "$0.05");
        assert_eq!(format_money(2499), "$24.99");
    }
}
