use crate::books::dto::BookDto;
use crate::core::library::Category;
use crate::members::dto::MemberDto;

fn rule(width: usize) -> String {
    "-".repeat(width)
}

fn book_row(book: &BookDto, with_availability: bool) -> String {
    let row = format!("{:<5}{:<25}{:<20}{:<15}", book.book_id, book.title, book.author, book.category.to_string());
    if with_availability {
        format!("{}{:<12}", row, if book.available { "Yes" } else { "No" })
    } else {
        row
    }
}

// Columns are padded, never truncated.
pub fn books_table(books: &[BookDto], with_availability: bool) -> String {
    let mut lines = if with_availability {
        vec![format!("{:<5}{:<25}{:<20}{:<15}{:<12}", "ID", "Title", "Author", "Category", "Available"), rule(77)]
    } else {
        vec![format!("{:<5}{:<25}{:<20}{:<15}", "ID", "Title", "Author", "Category"), rule(65)]
    };
    lines.extend(books.iter().map(|book| book_row(book, with_availability)));
    lines.iter().map(|line| format!("{}\n", line)).collect()
}

pub fn members_table(members: &[MemberDto]) -> String {
    let mut out = format!("{:<5}{:<25}{:<15}\n{}\n", "ID", "Name", "Books Borrowed", rule(45));
    for member in members {
        out.push_str(format!("{:<5}{:<25}{:<15}\n", member.member_id, member.name, member.books_borrowed).as_str());
    }
    out
}

pub fn categories_list() -> String {
    let mut out = String::from("Available Categories:\n");
    for (i, category) in Category::ALL.iter().enumerate() {
        out.push_str(format!("{}. {}\n", i + 1, category).as_str());
    }
    out
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;
    use crate::console::table::{books_table, categories_list, members_table};
    use crate::core::library::Category;
    use crate::members::dto::MemberDto;

    #[tokio::test]
    async fn test_should_format_books_table() {
        let mut book = BookDto::new(1, "Dune", "Frank Herbert", Category::Fiction);
        book.available = false;
        let table = books_table(&[book.clone()], true);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(3, lines.len());
        assert_eq!(77, lines[0].len());
        assert_eq!("-".repeat(77), lines[1]);
        assert_eq!(format!("{:<5}{:<25}{:<20}{:<15}{:<12}", "1", "Dune", "Frank Herbert", "Fiction", "No"), lines[2]);

        let short = books_table(&[book], false);
        assert!(short.lines().all(|l| l.len() == 65));
    }

    #[tokio::test]
    async fn test_should_format_members_table() {
        let table = members_table(&[MemberDto::new(7, "Ada Lovelace")]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!("-".repeat(45), lines[1]);
        assert!(lines[2].starts_with("7    Ada Lovelace"));
        assert!(lines[2].trim_end().ends_with('0'));
    }

    #[tokio::test]
    async fn test_should_number_categories() {
        let list = categories_list();
        assert!(list.contains("1. Fiction\n"));
        assert!(list.contains("2. Non-Fiction\n"));
        assert!(list.contains("6. Children\n"));
    }
}
