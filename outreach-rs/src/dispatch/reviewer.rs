//! Per-message review for preview mode

use crate::compose::ComposedMessage;
use std::io::{self, BufRead, Write};

/// What to do with a previewed message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewDecision {
    /// Send it.
    Proceed,
    /// Skip this row; its key stays claimed for the rest of the run but is
    /// not written to the ledger.
    Skip,
    /// Stop the whole run without touching the remaining rows.
    Abort,
}

/// Decides the fate of each composed message in preview mode.
pub trait Reviewer {
    fn review(&mut self, message: &ComposedMessage) -> ReviewDecision;
}

/// Interactive reviewer: prints the message and reads y / n / q from stdin.
pub struct StdinReviewer;

impl Reviewer for StdinReviewer {
    fn review(&mut self, message: &ComposedMessage) -> ReviewDecision {
        println!("\n--- Email Preview ---");
        println!("To     : {}", message.to);
        if let Some(cc) = &message.cc {
            println!("Cc     : {}", cc);
        }
        println!("Subject: {}", message.subject);
        println!("Body   :\n{}", message.body);
        println!("---------------------\n");

        print!("Send this email? (y/n/q): ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_err() {
            return ReviewDecision::Abort;
        }

        match line.trim().to_lowercase().as_str() {
            "y" | "yes" => ReviewDecision::Proceed,
            "q" | "quit" => ReviewDecision::Abort,
            _ => ReviewDecision::Skip,
        }
    }
}
