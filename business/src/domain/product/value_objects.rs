/// Closed set of product categories.
///
/// Requests refer to a category by its symbolic name (`SNACK`, `DRINK`, ...);
/// storage and responses only carry the integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Snack,
    SideDish,
    Drink,
    Dessert,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Snack,
        Category::SideDish,
        Category::Drink,
        Category::Dessert,
    ];

    /// Integer code persisted for this category.
    pub fn code(self) -> i32 {
        match self {
            Category::Snack => 1,
            Category::SideDish => 2,
            Category::Drink => 3,
            Category::Dessert => 4,
        }
    }

    /// Resolves a persisted code. Unknown codes are rejected rather than defaulted.
    pub fn from_code(code: i32) -> Result<Self, String> {
        Category::ALL
            .into_iter()
            .find(|category| category.code() == code)
            .ok_or_else(|| format!("Invalid category code: {}", code))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Snack => write!(f, "SNACK"),
            Category::SideDish => write!(f, "SIDE_DISH"),
            Category::Drink => write!(f, "DRINK"),
            Category::Dessert => write!(f, "DESSERT"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SNACK" => Ok(Category::Snack),
            "SIDE_DISH" => Ok(Category::SideDish),
            "DRINK" => Ok(Category::Drink),
            "DESSERT" => Ok(Category::Dessert),
            _ => Err(format!("Invalid category: {}", s)),
        }
    }
}

impl TryFrom<i32> for Category {
    type Error = String;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Category::from_code(code)
    }
}
