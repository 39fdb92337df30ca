use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::{debug, info};
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest};
use crate::catalog::domain::CatalogService;
use crate::catalog::factory::create_catalog_service;
use crate::console::prompt::Prompt;
use crate::console::table::{books_table, categories_list, members_table};
use crate::core::command::{Command, CommandError};
use crate::core::controller::{operator_message, AppState};
use crate::core::library::LibraryResult;
use crate::lending::command::borrow_book_cmd::{BorrowBookCommand, BorrowBookCommandRequest};
use crate::lending::command::get_loan_cmd::{GetLoanCommand, GetLoanCommandRequest};
use crate::lending::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest, ReturnBookCommandResponse};
use crate::lending::domain::LendingService;
use crate::lending::factory::create_lending_service;
use crate::members::command::get_member_cmd::{GetMemberCommand, GetMemberCommandRequest};
use crate::members::command::list_members_cmd::{ListMembersCommand, ListMembersCommandRequest};
use crate::members::command::register_member_cmd::{RegisterMemberCommand, RegisterMemberCommandRequest};
use crate::members::domain::MemberService;
use crate::members::factory::create_member_service;
use crate::persistence::flat_file::FlatFileStore;

const MENU: &str = "\nLibrary Management System
1. Add Book
2. Delete Book
3. View Books
4. Register Member
5. View Members
6. Borrow Book
7. Return Book
8. Search Books
0. Exit";

// Console drives the numbered menu until the operator exits or input ends,
// then writes every table back to disk.
pub struct Console<R, W> {
    state: AppState,
    prompt: Prompt<R, W>,
}

// None from a handler means input ended mid-dialog.
type Step = LibraryResult<Option<()>>;

impl<R: AsyncBufRead + Unpin, W: AsyncWrite + Unpin> Console<R, W> {
    pub fn new(state: AppState, reader: R, writer: W) -> Self {
        Self {
            state,
            prompt: Prompt::new(reader, writer),
        }
    }

    pub async fn run(&mut self) -> LibraryResult<()> {
        loop {
            self.prompt.say(MENU).await?;
            let Some(choice) = self.prompt.ask_integer("Enter your choice: ").await? else {
                debug!("input ended");
                break;
            };
            let step = match choice {
                1 => self.add_book().await?,
                2 => self.delete_book().await?,
                3 => self.view_books().await?,
                4 => self.register_member().await?,
                5 => self.view_members().await?,
                6 => self.borrow_book().await?,
                7 => self.return_book().await?,
                8 => self.search_books().await?,
                0 => {
                    self.prompt.say("Exiting the system...").await?;
                    break;
                }
                _ => {
                    self.prompt.say("Invalid choice! Please try again.").await?;
                    Some(())
                }
            };
            if step.is_none() {
                debug!(choice, "input ended");
                break;
            }
        }
        FlatFileStore::new(&self.state.config).save(&self.state.store).await?;
        info!("session closed");
        Ok(())
    }

    pub fn into_writer(self) -> W {
        self.prompt.into_writer()
    }

    fn catalog_service(&self) -> Box<dyn CatalogService> {
        create_catalog_service(&self.state.config, &self.state.store)
    }

    fn member_service(&self) -> Box<dyn MemberService> {
        create_member_service(&self.state.config, &self.state.store)
    }

    fn lending_service(&self) -> Box<dyn LendingService> {
        create_lending_service(&self.state.config, &self.state.store,
                               Box::new(self.state.clock.clone()))
    }

    async fn report(&mut self, err: &CommandError) -> LibraryResult<()> {
        debug!(error = ?err, "command failed");
        self.prompt.say(operator_message(err).as_str()).await
    }

    async fn add_book(&mut self) -> Step {
        let Some(book_id) = self.prompt.ask_integer("Enter Book ID: ").await? else { return Ok(None) };
        let Some(title) = self.prompt.ask("Enter Book Title: ").await? else { return Ok(None) };
        let Some(author) = self.prompt.ask("Enter Book Author: ").await? else { return Ok(None) };
        self.prompt.say(categories_list().trim_end()).await?;
        let Some(category_index) = self.prompt.ask_integer("Select a category by number: ").await? else { return Ok(None) };

        let req = AddBookCommandRequest::new(book_id, title.as_str(), author.as_str(), category_index);
        match AddBookCommand::new(self.catalog_service()).execute(req).await {
            Ok(_) => self.prompt.say("Book added successfully!").await?,
            Err(err) => self.report(&err).await?,
        }
        Ok(Some(()))
    }

    async fn delete_book(&mut self) -> Step {
        self.show_available_books().await?;
        let Some(book_id) = self.prompt.ask_integer("Enter Book ID to delete: ").await? else { return Ok(None) };
        match RemoveBookCommand::new(self.catalog_service()).execute(RemoveBookCommandRequest::new(book_id)).await {
            Ok(_) => self.prompt.say("Book deleted successfully!").await?,
            Err(err) => self.report(&err).await?,
        }
        Ok(Some(()))
    }

    async fn view_books(&mut self) -> Step {
        match ListBooksCommand::new(self.catalog_service()).execute(ListBooksCommandRequest::all()).await {
            Ok(res) if res.books.is_empty() => self.prompt.say("There are no books in the library.").await?,
            Ok(res) => self.prompt.say(books_table(&res.books, true).trim_end()).await?,
            Err(err) => self.report(&err).await?,
        }
        Ok(Some(()))
    }

    async fn show_available_books(&mut self) -> LibraryResult<()> {
        match ListBooksCommand::new(self.catalog_service()).execute(ListBooksCommandRequest::available()).await {
            Ok(res) if res.books.is_empty() => self.prompt.say("There are no books available to borrow.").await,
            Ok(res) => self.prompt.say(books_table(&res.books, false).trim_end()).await,
            Err(err) => self.report(&err).await,
        }
    }

    async fn register_member(&mut self) -> Step {
        let Some(member_id) = self.prompt.ask_integer("Enter Member ID: ").await? else { return Ok(None) };
        let Some(name) = self.prompt.ask("Enter Member Name: ").await? else { return Ok(None) };
        let req = RegisterMemberCommandRequest::new(member_id, name.as_str());
        match RegisterMemberCommand::new(self.member_service()).execute(req).await {
            Ok(_) => self.prompt.say("Member registered successfully!").await?,
            Err(err) => self.report(&err).await?,
        }
        Ok(Some(()))
    }

    async fn view_members(&mut self) -> Step {
        match ListMembersCommand::new(self.member_service()).execute(ListMembersCommandRequest::default()).await {
            Ok(res) if res.members.is_empty() => self.prompt.say("There are no registered members.").await?,
            Ok(res) => self.prompt.say(members_table(&res.members).trim_end()).await?,
            Err(err) => self.report(&err).await?,
        }
        Ok(Some(()))
    }

    async fn borrow_book(&mut self) -> Step {
        let Some(member_id) = self.prompt.ask_integer("Enter Member ID: ").await? else { return Ok(None) };
        self.show_available_books().await?;
        let Some(book_id) = self.prompt.ask_integer("Enter Book ID to borrow: ").await? else { return Ok(None) };
        let req = BorrowBookCommandRequest::new(member_id, book_id);
        match BorrowBookCommand::new(self.lending_service()).execute(req).await {
            Ok(res) => {
                self.prompt.say("Book borrowed successfully!").await?;
                self.prompt.say(res.advisory().as_str()).await?;
            }
            Err(err) => self.report(&err).await?,
        }
        Ok(Some(()))
    }

    // The recorded loan supplies the borrow date; the operator is asked only
    // when a lent book has none on record.
    async fn return_book(&mut self) -> Step {
        let Some(member_id) = self.prompt.ask_integer("Enter Member ID: ").await? else { return Ok(None) };
        let Some(book_id) = self.prompt.ask_integer("Enter Book ID: ").await? else { return Ok(None) };
        let loan = match GetLoanCommand::new(self.lending_service()).execute(GetLoanCommandRequest::new(book_id)).await {
            Ok(res) => res.loan,
            Err(err) => {
                self.report(&err).await?;
                return Ok(Some(()));
            }
        };
        let borrow_date = match loan {
            Some(loan) => {
                if loan.member_id == member_id {
                    self.prompt.say(format!("Recorded borrow date: {} (due {}).", loan.borrowed_on, loan.due_on).as_str()).await?;
                }
                None
            }
            None if self.needs_borrow_date(member_id, book_id).await => {
                let Some(date) = self.prompt.ask("Enter the borrow date (YYYY-MM-DD): ").await? else { return Ok(None) };
                Some(date.trim().to_string())
            }
            None => None,
        };
        let req = ReturnBookCommandRequest::new(member_id, book_id, borrow_date);
        match ReturnBookCommand::new(self.lending_service()).execute(req).await {
            Ok(res) => self.print_receipt(&res).await?,
            Err(err) => self.report(&err).await?,
        }
        Ok(Some(()))
    }

    // A date only matters for a lent book and a known member; any other case
    // is reported by the return itself.
    async fn needs_borrow_date(&self, member_id: i64, book_id: i64) -> bool {
        let lent = match GetBookCommand::new(self.catalog_service()).execute(GetBookCommandRequest::new(book_id)).await {
            Ok(res) => !res.book.available,
            Err(_) => false,
        };
        lent && GetMemberCommand::new(self.member_service())
            .execute(GetMemberCommandRequest::new(member_id)).await.is_ok()
    }

    async fn print_receipt(&mut self, res: &ReturnBookCommandResponse) -> LibraryResult<()> {
        let receipt = &res.receipt;
        self.prompt.say("Book returned successfully!").await?;
        self.prompt.say(format!("Borrowed on {}, kept {} day(s).",
                                receipt.borrowed_on, receipt.assessment.days_borrowed).as_str()).await?;
        if receipt.is_on_time() {
            self.prompt.say("Book returned on time. No fine.").await
        } else {
            self.prompt.say(format!("Overdue by {} day(s). Fine: ${}",
                                    receipt.assessment.overdue_days, receipt.assessment.fine).as_str()).await
        }
    }

    async fn search_books(&mut self) -> Step {
        let Some(keyword) = self.prompt.ask("Enter keyword to search (ID, title, author, or category): ").await? else {
            return Ok(None);
        };
        let req = SearchBooksCommandRequest::new(keyword.as_str());
        match SearchBooksCommand::new(self.catalog_service()).execute(req).await {
            Ok(res) if res.books.is_empty() => {
                self.prompt.say(format!("No books found matching the keyword \"{}\".", res.keyword).as_str()).await?
            }
            Ok(res) => {
                self.prompt.say(format!("Search results for \"{}\":", res.keyword).as_str()).await?;
                self.prompt.say(books_table(&res.books, true).trim_end()).await?
            }
            Err(err) => self.report(&err).await?,
        }
        Ok(Some(()))
    }
}
