use std::io::{self, BufRead};

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::commands::{print_json, Context};
use crate::error::invalid_input;
use dialsift_core::{filter_phone_characters_with, UnicodeDigits};

#[derive(Debug, Args)]
pub struct CleanArgs {
    /// Raw inputs; reads stdin line by line when omitted
    pub input: Vec<String>,
    /// Keep recognized digit glyphs instead of folding them to ASCII
    #[arg(long)]
    pub keep_glyphs: bool,
    /// Fail when any input filters down to nothing
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Serialize)]
struct CleanedDto {
    raw: String,
    cleaned: String,
}

pub fn clean(ctx: &Context<'_>, args: CleanArgs) -> Result<()> {
    let classifier = if args.keep_glyphs {
        UnicodeDigits::verbatim()
    } else {
        ctx.config.classifier()
    };
    let strict = args.strict || ctx.config.strict;

    let inputs = if args.input.is_empty() {
        read_stdin_lines()?
    } else {
        args.input
    };

    let items: Vec<CleanedDto> = inputs
        .into_iter()
        .map(|raw| {
            let cleaned = filter_phone_characters_with(&classifier, &raw);
            CleanedDto { raw, cleaned }
        })
        .collect();

    if strict {
        if let Some(item) = items.iter().find(|item| item.cleaned.is_empty()) {
            return Err(invalid_input(format!(
                "no phone characters in {:?}",
                item.raw
            )));
        }
    }

    if ctx.json {
        if let [item] = items.as_slice() {
            print_json(item)?;
        } else {
            print_json(&items)?;
        }
        return Ok(());
    }

    for item in &items {
        println!("{}", item.cleaned);
    }
    Ok(())
}

fn read_stdin_lines() -> Result<Vec<String>> {
    let stdin = io::stdin().lock();
    let mut lines = Vec::new();
    for line in stdin.lines() {
        lines.push(line?);
    }
    Ok(lines)
}
