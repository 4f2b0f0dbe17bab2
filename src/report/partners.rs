use crate::domain::model::Category;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Partner {
    pub name: &'static str,
    pub category: Category,
    pub description: &'static str,
}

pub const PARTNERS: &[Partner] = &[
    Partner {
        name: "Blinds Today",
        category: Category::Windows,
        description: "Premium window treatments with professional installation",
    },
    Partner {
        name: "Paint in the Shade",
        category: Category::Paint,
        description: "Expert painting with complimentary temporary window coverings",
    },
    Partner {
        name: "Floors in Focus",
        category: Category::Flooring,
        description: "Quality flooring installation with coordinated window treatments",
    },
];
