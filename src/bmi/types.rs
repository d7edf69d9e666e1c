//! BMI type definitions
//!
//! Categories carry their presentation metadata through a static table
//! keyed by variant, so banding never touches display strings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Health category derived from a BMI value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

/// Color token attached to a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayColor {
    Amber,
    Cyan,
    Coral,
    DarkRed,
}

/// Presentation metadata for one category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryInfo {
    pub name: &'static str,
    pub advisory: &'static str,
    pub color: DisplayColor,
}

const UNDERWEIGHT: CategoryInfo = CategoryInfo {
    name: "Underweight",
    advisory: "Consider nutrient-dense foods.",
    color: DisplayColor::Amber,
};

const NORMAL: CategoryInfo = CategoryInfo {
    name: "Normal",
    advisory: "Great job maintaining a healthy weight!",
    color: DisplayColor::Cyan,
};

const OVERWEIGHT: CategoryInfo = CategoryInfo {
    name: "Overweight",
    advisory: "Small lifestyle tweaks can help.",
    color: DisplayColor::Coral,
};

const OBESE: CategoryInfo = CategoryInfo {
    name: "Obese",
    advisory: "Consult a professional for support.",
    color: DisplayColor::DarkRed,
};

impl Category {
    /// Every category, lowest band first
    pub const ALL: [Category; 4] = [
        Category::Underweight,
        Category::Normal,
        Category::Overweight,
        Category::Obese,
    ];

    /// Lower bound of the Normal band (inclusive)
    pub const NORMAL_MIN: f64 = 18.5;
    /// Lower bound of the Overweight band (inclusive)
    pub const OVERWEIGHT_MIN: f64 = 25.0;
    /// Lower bound of the Obese band (inclusive)
    pub const OBESE_MIN: f64 = 30.0;

    /// Place a BMI value in its left-closed, right-open band.
    ///
    /// Values that fail every comparison (NaN) fall through to `Obese`.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < Self::NORMAL_MIN {
            Category::Underweight
        } else if bmi < Self::OVERWEIGHT_MIN {
            Category::Normal
        } else if bmi < Self::OBESE_MIN {
            Category::Overweight
        } else {
            Category::Obese
        }
    }

    /// Metadata lookup
    pub fn info(&self) -> &'static CategoryInfo {
        match self {
            Category::Underweight => &UNDERWEIGHT,
            Category::Normal => &NORMAL,
            Category::Overweight => &OVERWEIGHT,
            Category::Obese => &OBESE,
        }
    }

    /// Title-case display name
    pub fn name(&self) -> &'static str {
        self.info().name
    }

    pub fn advisory(&self) -> &'static str {
        self.info().advisory
    }

    pub fn color(&self) -> DisplayColor {
        self.info().color
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl DisplayColor {
    /// Hex code, e.g. "#00D4FF"
    pub fn hex(&self) -> &'static str {
        match self {
            DisplayColor::Amber => "#FFB800",
            DisplayColor::Cyan => "#00D4FF",
            DisplayColor::Coral => "#FF6B6B",
            DisplayColor::DarkRed => "#C92C2C",
        }
    }

    /// RGB triple for truecolor terminals
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            DisplayColor::Amber => (0xFF, 0xB8, 0x00),
            DisplayColor::Cyan => (0x00, 0xD4, 0xFF),
            DisplayColor::Coral => (0xFF, 0x6B, 0x6B),
            DisplayColor::DarkRed => (0xC9, 0x2C, 0x2C),
        }
    }
}

/// Outcome of one BMI computation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClassificationResult {
    /// BMI rounded to one decimal place
    pub value: f64,
    pub category: Category,
    pub advisory: &'static str,
    pub display_color: DisplayColor,
}

impl ClassificationResult {
    /// Build a result whose metadata follows the category table
    pub fn new(value: f64, category: Category) -> Self {
        let info = category.info();
        Self {
            value,
            category,
            advisory: info.advisory,
            display_color: info.color,
        }
    }

    /// Plain-text form used for clipboard copies
    pub fn summary(&self) -> String {
        format!(
            "BMI: {:.1}\nCategory: {}\nTip: {}",
            self.value,
            self.category.name(),
            self.advisory
        )
    }
}
