/// A product added from a card's "buy" button.
#[derive(Clone, Debug, PartialEq)]
pub struct CartItem {
    pub name: String,
    pub price: f64,
}

/// Memory-only, append-only cart. Discarded with the page.
#[derive(Clone, Debug, Default)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append unconditionally; identical items stay separate entries.
    /// Returns the new length.
    pub fn add(&mut self, name: impl Into<String>, price: f64) -> usize {
        self.items.push(CartItem {
            name: name.into(),
            price,
        });
        self.items.len()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// `"$49.99"` → 49.99. Unparseable text gives NaN rather than an error.
///
/// Like a browser `parseFloat`, the longest leading run that reads as a number
/// wins: `"49.99/mo"` → 49.99, `"1.2.3"` → 1.2, `"1e3"` → 1000.
pub fn parse_price(text: &str) -> f64 {
    let cleaned = text.replace('$', "");
    let cleaned = cleaned.trim_start();
    // Only numeric characters can extend a float literal; this also keeps
    // `inf`/`nan` spellings out.
    let run = cleaned
        .find(|c: char| !(c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-')))
        .unwrap_or(cleaned.len());
    (1..=run)
        .rev()
        .find_map(|end| cleaned[..end].parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

pub fn added_message(name: &str) -> String {
    format!("{name} has been added to your cart!")
}
