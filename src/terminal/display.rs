//! Display manager for the terminal quiz
//!
//! Renders questions with a progress bar, the results view with tips, and
//! the subscription offer.

use chrono::{DateTime, Utc};
use colored::*;
use crossterm::{
    cursor,
    execute,
    terminal::{Clear, ClearType},
};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::io;

use crate::offer::Offer;
use crate::quiz::{Progress, Question};
use crate::tips::Tip;

const WIDTH: usize = 64;

const SUCCESS_TITLE: &str = "💪 Visualize Seu Sucesso";
const SUCCESS_SCENES: [&str; 2] = [
    "Pessoa saudável praticando exercícios",
    "Alimentação saudável",
];
const SUCCESS_MESSAGE: &str =
    "Essas imagens representam o futuro saudável que você está construindo! 💪";

/// Lines of the success section shown before the tips
pub fn success_lines() -> Vec<String> {
    SUCCESS_SCENES
        .iter()
        .map(|scene| format!("• {}", scene))
        .chain(std::iter::once(SUCCESS_MESSAGE.to_string()))
        .collect()
}

/// Footer shown under each question
pub fn steps_message(remaining: usize) -> String {
    let noun = if remaining == 1 { "passo" } else { "passos" };
    format!(
        "Você está a {} {} do seu plano personalizado!",
        remaining, noun
    )
}

pub struct DisplayManager {
    show_progress: bool,
    clear_between: bool,
}

impl DisplayManager {
    pub fn new(show_progress: bool, clear_between: bool) -> Self {
        DisplayManager {
            show_progress,
            clear_between,
        }
    }

    /// Show welcome banner
    pub fn show_banner(&self) {
        let rule = "=".repeat(WIDTH);
        println!("\n{}", rule.green());
        println!("{}", "  ❤ Quiz de Saúde".bold().green());
        println!("{}", "  Descubra o plano perfeito para seus objetivos".dimmed());
        println!("{}\n", rule.green());
    }

    /// Render one question with progress and numbered options
    pub fn show_question(&self, question: &Question, progress: Progress) -> io::Result<()> {
        if self.clear_between {
            self.clear_screen()?;
            self.show_banner();
        }

        if self.show_progress {
            self.draw_progress(progress);
        }

        println!("\n{}\n", question.prompt.bold());
        for (i, option) in question.options.iter().enumerate() {
            println!(
                "  {} {} {}",
                format!("{}.", i + 1).green().bold(),
                option.icon.glyph(),
                option.label
            );
        }
        println!("\n{} {}", "⚡".yellow(), steps_message(progress.remaining).dimmed());
        Ok(())
    }

    fn draw_progress(&self, progress: Progress) {
        let pb = ProgressBar::with_draw_target(
            Some(progress.total as u64),
            ProgressDrawTarget::stdout(),
        );
        pb.set_style(
            ProgressStyle::default_bar()
                .template("Pergunta {pos} de {len} [{bar:40.green/yellow}] {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=>-"),
        );
        pb.set_message(format!("{}%", progress.percent));
        pb.set_position(progress.position as u64);
        pb.abandon();
    }

    /// Hint printed when the user types something that is not an option
    pub fn show_invalid_choice(&self, input: &str, option_count: usize) {
        println!(
            "{} '{}' não é uma opção. Digite um número de 1 a {}.",
            "✗".red(),
            input,
            option_count
        );
    }

    /// Results view: congratulations, success section, tips, offer
    pub fn show_results(&self, tips: &[Tip], offer: &Offer, completed_at: Option<DateTime<Utc>>) -> io::Result<()> {
        if self.clear_between {
            self.clear_screen()?;
        }

        let rule = "=".repeat(WIDTH);
        println!("\n{}", rule.yellow());
        println!("{}", "  🏆 Parabéns! 🎉".bold().yellow());
        println!("  Você completou o quiz de saúde");
        if let Some(at) = completed_at {
            println!("{}", format!("  Concluído em {}", at.format("%d/%m/%Y %H:%M UTC")).dimmed());
        }
        println!("{}", rule.yellow());

        self.show_section(SUCCESS_TITLE);
        for line in success_lines() {
            println!("  {}", line);
        }

        self.show_section("✨ Dicas Personalizadas Para Você");
        for tip in tips {
            println!("\n  {} {}", tip.icon.glyph(), tip.title.bold());
            println!("     {}", tip.description);
        }

        self.show_offer(offer);

        println!(
            "\n{} {}\n",
            "Refazer o quiz:".dimmed(),
            "healthquiz reset".green()
        );
        Ok(())
    }

    fn show_offer(&self, offer: &Offer) {
        self.show_section(offer.headline);
        println!("  {}", offer.plan);
        println!("  {}\n", offer.price_line().bold().green());
        for feature in offer.features {
            println!("  {} {}", "✓".green(), feature);
        }
        println!("\n  {} →", offer.call_to_action.bold());
        println!("  {}", format!("🔒 {}", offer.footnote).dimmed());
    }

    pub fn show_section(&self, title: &str) {
        println!("\n{}", title.bold().cyan());
        println!("{}", "-".repeat(WIDTH).cyan());
    }

    pub fn show_info(&self, info: &str) {
        println!("{} {}", "Info:".cyan(), info);
    }

    pub fn clear_screen(&self) -> io::Result<()> {
        execute!(io::stdout(), Clear(ClearType::All), cursor::MoveTo(0, 0))
    }
}
