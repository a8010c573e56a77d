use anyhow::{anyhow, Result};

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ShowRoutes,
    AddRoute,
    RemoveRoute,
    ShowStudents,
    AddStudent,
    RemoveStudent,
    FeeSlip,
    Summary,
    Save,
    Exit,
}

impl MenuChoice {
    /// Menu entries in display order.
    pub const ALL: [MenuChoice; 10] = [
        MenuChoice::ShowRoutes,
        MenuChoice::AddRoute,
        MenuChoice::RemoveRoute,
        MenuChoice::ShowStudents,
        MenuChoice::AddStudent,
        MenuChoice::RemoveStudent,
        MenuChoice::FeeSlip,
        MenuChoice::Summary,
        MenuChoice::Save,
        MenuChoice::Exit,
    ];

    /// The number typed to pick this entry.
    pub fn number(self) -> u8 {
        match self {
            MenuChoice::ShowRoutes => 1,
            MenuChoice::AddRoute => 2,
            MenuChoice::RemoveRoute => 3,
            MenuChoice::ShowStudents => 4,
            MenuChoice::AddStudent => 5,
            MenuChoice::RemoveStudent => 6,
            MenuChoice::FeeSlip => 7,
            MenuChoice::Summary => 8,
            MenuChoice::Save => 9,
            MenuChoice::Exit => 0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::ShowRoutes => "Show routes",
            MenuChoice::AddRoute => "Add route",
            MenuChoice::RemoveRoute => "Remove route",
            MenuChoice::ShowStudents => "Show students",
            MenuChoice::AddStudent => "Add student",
            MenuChoice::RemoveStudent => "Remove student",
            MenuChoice::FeeSlip => "Generate fee slip for student",
            MenuChoice::Summary => "Print summary",
            MenuChoice::Save => "Save data",
            MenuChoice::Exit => "Exit",
        }
    }

    /// Parse a typed selection. Surrounding whitespace is ignored; anything
    /// that is not one of the menu numbers yields `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let number = raw.trim().parse::<u8>().ok()?;
        Self::ALL
            .into_iter()
            .find(|choice| choice.number() == number)
    }
}

/// Validate a display name.
pub(crate) fn parse_name(raw: &str, field: &str) -> Result<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(anyhow!("{field} is required."));
    }
    Ok(name.to_string())
}

/// Parse a record id. `0` is accepted; it matches no record.
pub(crate) fn parse_id(raw: &str, field: &str) -> Result<u32> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| anyhow!("{field} must be a whole number."))
}

/// Parse a non-negative, finite real number such as a distance or rate.
pub(crate) fn parse_amount(raw: &str, field: &str) -> Result<f64> {
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| anyhow!("{field} must be a number."))?;
    if !value.is_finite() || value < 0.0 {
        return Err(anyhow!("{field} must be zero or more."));
    }
    Ok(value)
}
