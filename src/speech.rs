use crate::category::Category;

pub const CARD_TITLE: &str = "Product Hunt";

pub fn hello() -> &'static str {
    "Welcome, to Product Hunt! Which category do you want?"
}

pub fn hello_card() -> &'static str {
    "Product Hunt. Which category do you want hunts for?"
}

pub fn which_category() -> &'static str {
    "Which category do you want?"
}

pub fn help() -> &'static str {
    "With Product Hunt, you can get hunts for any category.  For example, you could ask for hunts in technology, books, podcasts, or games. Which category do you want?"
}

pub fn yes() -> &'static str {
    "Ok, which category would you like hunts for. For example, you could ask for hunts in technology, books, podcasts, or games."
}

pub fn goodbye() -> &'static str {
    "Thanks for hunting!"
}

pub fn fallback() -> &'static str {
    "I'm sorry, I didn't quite catch that. What category are you looking for hunts for? For example you can ask for hunts in books, technology, games or podcasts."
}

pub fn unknown_category() -> &'static str {
    "I'm sorry, I don't know that category. You can ask for hunts in books, technology, games or podcasts. Which category do you want?"
}

pub fn unavailable() -> &'static str {
    "I'm sorry, Product Hunt is not responding right meow. Please try again later."
}

pub fn hmm() -> &'static str {
    "My bad, didn't catch that. Can you repeat it?"
}

pub fn another_category() -> &'static str {
    "Would you like another category now?"
}

pub fn hunts_title(category: Category) -> String {
    format!("Today's Hunts for {}", category)
}

/// `fragments` must already be speech safe.
pub fn hunts(category: Category, fragments: &str) -> String {
    format!(
        "{} are: {} <break strength=\"strong\"/> {}",
        hunts_title(category),
        fragments,
        another_category()
    )
}
