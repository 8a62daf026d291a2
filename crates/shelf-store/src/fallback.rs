//! Built-in book list used when the catalog cannot seed the store.

use shelf_core::Book;

/// Author of every fallback record.
pub const FALLBACK_AUTHOR: &str = "J.R.R. Tolkien";

/// `(id, title, first published)` for each fallback record.
const FALLBACK_WORKS: [(&str, &str, i32); 25] = [
    ("1", "The Hobbit", 1937),
    ("2", "The Fellowship of the Ring", 1954),
    ("3", "The Two Towers", 1954),
    ("4", "The Return of the King", 1955),
    ("5", "The Silmarillion", 1977),
    ("6", "Unfinished Tales", 1980),
    ("7", "The Children of Húrin", 2007),
    ("8", "Beren and Lúthien", 2017),
    ("9", "The Fall of Gondolin", 2018),
    ("10", "Farmer Giles of Ham", 1949),
    ("11", "The Adventures of Tom Bombadil", 1962),
    ("12", "Smith of Wootton Major", 1967),
    ("13", "Leaf by Niggle", 1945),
    ("14", "Tree and Leaf", 1964),
    ("15", "The Father Christmas Letters", 1976),
    ("16", "Roverandom", 1998),
    ("17", "Mr. Bliss", 1982),
    ("18", "The Book of Lost Tales, Part One", 1983),
    ("19", "The Book of Lost Tales, Part Two", 1984),
    ("20", "The Lays of Beleriand", 1985),
    ("21", "The Shaping of Middle-earth", 1986),
    ("22", "The Lost Road and Other Writings", 1987),
    ("23", "The Legend of Sigurd and Gudrún", 2009),
    ("24", "The Fall of Arthur", 2013),
    ("25", "The Story of Kullervo", 2015),
];

/// The fallback records with their fixed IDs, in order.
#[must_use]
pub fn fallback_books() -> Vec<Book> {
    FALLBACK_WORKS
        .iter()
        .map(|&(id, title, year)| Book::new(id, title, FALLBACK_AUTHOR, Some(year)))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn twenty_five_tolkien_records() {
        let books = fallback_books();
        assert_eq!(books.len(), 25);
        assert!(books.iter().all(|b| b.author == FALLBACK_AUTHOR));
        assert!(books.iter().all(|b| !b.title.is_empty()));
    }

    #[test]
    fn ids_are_fixed_and_unique() {
        let books = fallback_books();
        let ids: HashSet<&str> = books.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids.len(), books.len());
        assert_eq!(books[0].id, "1");
        assert_eq!(books[24].id, "25");
    }
}
