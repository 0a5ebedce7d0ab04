use std::io::{self, BufRead, Write};

use crate::app::{AppContext, Result};
use crate::atlas;
use crate::domain::{SortKey, ViewFilter, REACTION_SYMBOLS};
use crate::query;

pub fn post(ctx: &mut AppContext, title: &str, image: &str, content: &str) -> Result<()> {
    let article = ctx.store.create(title, image, content)?;
    report_save_warning(ctx);

    println!("Published \"{}\" (id {})", article.title, article.id);
    Ok(())
}

pub fn delete(ctx: &mut AppContext, id: i64, yes: bool) -> Result<()> {
    let Some(article) = ctx.store.get(id) else {
        println!("No article with id {}", id);
        return Ok(());
    };

    if !yes && !confirm(&format!("Delete \"{}\" permanently? [y/N] ", article.title))? {
        println!("Cancelled");
        return Ok(());
    }

    ctx.store.delete(id);
    report_save_warning(ctx);
    println!("Article deleted");
    Ok(())
}

pub fn react(ctx: &mut AppContext, id: i64, symbol: &str) -> Result<()> {
    match ctx.store.react(id, symbol)? {
        Some(article) => {
            report_save_warning(ctx);
            println!(
                "{} {} on \"{}\"",
                symbol,
                article.count_for(symbol),
                article.title
            );
        }
        None => println!("No article with id {}", id),
    }
    Ok(())
}

pub fn list(ctx: &AppContext, search: Option<&str>, sort: SortKey) -> Result<()> {
    let filter = ViewFilter::new(search.unwrap_or(""), sort);
    let results = query::run(ctx.store.snapshot(), &filter);

    if results.is_empty() {
        println!("No articles found");
        return Ok(());
    }

    for article in &results {
        let reactions = if article.reaction_total() > 0 {
            format!("  [{} reactions]", article.reaction_total())
        } else {
            String::new()
        };
        println!(
            "{}  {}  {}{}",
            article.id,
            article.created_at.format("%Y-%m-%d"),
            article.title,
            reactions
        );
    }
    println!(
        "\n{} article{}",
        results.len(),
        if results.len() == 1 { "" } else { "s" }
    );

    Ok(())
}

pub fn country(name: Option<&str>) -> Result<()> {
    let Some(name) = name else {
        for country in atlas::country_names() {
            println!("{}", country);
        }
        return Ok(());
    };

    let stats = atlas::lookup(name);
    println!("Education statistics for {}", name);
    println!("  Literacy rate:            {}%", stats.literacy_rate);
    println!("  School enrollment:        {}%", stats.school_enrollment);
    println!("  Avg years of schooling:   {} years", stats.avg_years_schooling);
    println!("  Pupil-teacher ratio:      {}:1", stats.pupil_teacher_ratio);
    println!("  Education spending:       {}% of GDP", stats.education_spending);
    println!("  Tertiary enrollment:      {}%", stats.tertiary_enrollment);
    println!("  Children out of school:   {}M", stats.out_of_school);
    Ok(())
}

/// Print the ten allowed reaction symbols, for `react` error messages.
pub fn print_reaction_symbols() {
    println!("Allowed reactions: {}", REACTION_SYMBOLS.join(" "));
}

fn report_save_warning(ctx: &mut AppContext) {
    if let Some(warning) = ctx.store.take_save_warning() {
        eprintln!("warning: changes were not saved to disk: {}", warning);
    }
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}
