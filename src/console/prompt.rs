use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use crate::core::library::LibraryResult;

// Prompt reads operator answers line by line. `None` means input has ended.
pub struct Prompt<R, W> {
    reader: R,
    writer: W,
}

impl<R: AsyncBufRead + Unpin, W: AsyncWrite + Unpin> Prompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
        }
    }

    pub async fn say(&mut self, text: &str) -> LibraryResult<()> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await?;
        Ok(())
    }

    pub async fn ask(&mut self, question: &str) -> LibraryResult<Option<String>> {
        self.writer.write_all(question.as_bytes()).await?;
        self.writer.flush().await?;
        let mut line = String::new();
        if self.reader.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Asks until the answer is a whole number.
    pub async fn ask_integer(&mut self, question: &str) -> LibraryResult<Option<i64>> {
        loop {
            match self.ask(question).await? {
                None => return Ok(None),
                Some(answer) => match answer.trim().parse::<i64>() {
                    Ok(n) => return Ok(Some(n)),
                    Err(_) => self.say("Invalid input. Please enter a number.").await?,
                },
            }
        }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use crate::console::prompt::Prompt;

    #[tokio::test]
    async fn test_should_reprompt_until_number() {
        let input: &[u8] = b"abc\n\n 42 \n";
        let mut prompt = Prompt::new(input, Vec::new());
        let answer = prompt.ask_integer("Enter Book ID: ").await.expect("should read");
        assert_eq!(Some(42), answer);
        let out = String::from_utf8(prompt.into_writer()).expect("utf8");
        assert_eq!(3, out.matches("Enter Book ID: ").count());
        assert_eq!(2, out.matches("Invalid input. Please enter a number.").count());
    }

    #[tokio::test]
    async fn test_should_report_end_of_input() {
        let input: &[u8] = b"Dune\r\n";
        let mut prompt = Prompt::new(input, Vec::new());
        assert_eq!(Some("Dune".to_string()), prompt.ask("Enter Book Title: ").await.expect("should read"));
        assert_eq!(None, prompt.ask("Enter Book Author: ").await.expect("should read"));
        assert_eq!(None, prompt.ask_integer("Enter Book ID: ").await.expect("should read"));
    }
}
