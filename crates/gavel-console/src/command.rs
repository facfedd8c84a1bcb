use crate::error::ConsoleError;
use gavel_core::{
    catalog::{ApiSource, TypeCategory},
    table::OrderDirection,
};

///
/// Command
///
/// One parsed console command. Parsing is total over non-empty input:
/// anything unrecognized is an `UnknownCommand` error, never a panic.
///

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Datasets,
    Open(String),
    Search(Option<String>),
    Sort {
        field: Option<String>,
        direction: Option<OrderDirection>,
    },
    Page(u32),
    Next,
    Prev,
    First,
    Last,
    Show,
    Glossary(Option<ApiSource>),
    Filter(Vec<TypeCategory>),
    TypeDetail(String),
    Counts,
    Export,
    Help,
    Quit,
}

/// Parse one input line. Blank lines parse to `None`.
pub fn parse(line: &str) -> Result<Option<Command>, ConsoleError> {
    let mut tokens = line.split_whitespace();
    let Some(head) = tokens.next() else {
        return Ok(None);
    };

    let rest: Vec<&str> = tokens.collect();
    let command = match head.to_ascii_lowercase().as_str() {
        "datasets" | "ls" => Command::Datasets,
        "open" => match rest.first() {
            Some(name) => Command::Open((*name).to_string()),
            None => return Err(ConsoleError::UnknownCommand("open (missing dataset)".into())),
        },
        "search" | "/" => {
            let query = rest.join(" ");
            Command::Search((!query.is_empty()).then_some(query))
        }
        "sort" => parse_sort(&rest)?,
        "page" => match rest.first().and_then(|token| token.parse().ok()) {
            Some(number) => Command::Page(number),
            None => return Err(ConsoleError::UnknownCommand("page (expected a number)".into())),
        },
        "next" | "n" => Command::Next,
        "prev" | "p" => Command::Prev,
        "first" => Command::First,
        "last" => Command::Last,
        "show" => Command::Show,
        "glossary" => match rest.first() {
            None => Command::Glossary(None),
            Some(&"management") => Command::Glossary(Some(ApiSource::Management)),
            Some(&"client") => Command::Glossary(Some(ApiSource::Client)),
            Some(other) => {
                return Err(ConsoleError::UnknownCommand(format!(
                    "glossary {other} (expected `management` or `client`)"
                )));
            }
        },
        "filter" => Command::Filter(parse_categories(&rest)?),
        "type" => match rest.first() {
            Some(name) => Command::TypeDetail((*name).to_string()),
            None => return Err(ConsoleError::UnknownCommand("type (missing name)".into())),
        },
        "counts" => Command::Counts,
        "export" => Command::Export,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(ConsoleError::UnknownCommand(other.to_string())),
    };

    Ok(Some(command))
}

fn parse_sort(rest: &[&str]) -> Result<Command, ConsoleError> {
    let Some(field) = rest.first() else {
        return Ok(Command::Sort {
            field: None,
            direction: None,
        });
    };

    let direction = match rest.get(1) {
        None => None,
        Some(token) if token.eq_ignore_ascii_case("asc") => Some(OrderDirection::Asc),
        Some(token) if token.eq_ignore_ascii_case("desc") => Some(OrderDirection::Desc),
        Some(other) => {
            return Err(ConsoleError::UnknownCommand(format!(
                "sort {field} {other} (expected `asc` or `desc`)"
            )));
        }
    };

    Ok(Command::Sort {
        field: Some((*field).to_string()),
        direction,
    })
}

// Comma-separated category list; each entry toggles in the session.
fn parse_categories(rest: &[&str]) -> Result<Vec<TypeCategory>, ConsoleError> {
    let mut categories = Vec::new();

    for token in rest.iter().flat_map(|chunk| chunk.split(',')) {
        if token.is_empty() {
            continue;
        }
        let category = token.parse().map_err(|_| {
            let known = TypeCategory::ALL.map(|category| category.to_string()).join(", ");
            ConsoleError::UnknownCategory(token.to_string(), known)
        })?;
        categories.push(category);
    }

    Ok(categories)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_parse_to_none() {
        assert_eq!(parse("").unwrap(), None);
        assert_eq!(parse("   ").unwrap(), None);
    }

    #[test]
    fn search_joins_the_remaining_tokens() {
        assert_eq!(
            parse("search oil painting").unwrap(),
            Some(Command::Search(Some("oil painting".into())))
        );
        assert_eq!(parse("search").unwrap(), Some(Command::Search(None)));
    }

    #[test]
    fn sort_accepts_optional_direction() {
        assert_eq!(
            parse("sort amount desc").unwrap(),
            Some(Command::Sort {
                field: Some("amount".into()),
                direction: Some(OrderDirection::Desc),
            })
        );
        assert_eq!(
            parse("sort amount").unwrap(),
            Some(Command::Sort {
                field: Some("amount".into()),
                direction: None,
            })
        );
        assert!(parse("sort amount sideways").is_err());
    }

    #[test]
    fn filter_splits_comma_separated_categories() {
        assert_eq!(
            parse("filter enum,object").unwrap(),
            Some(Command::Filter(vec![
                TypeCategory::Enum,
                TypeCategory::Object
            ]))
        );
        assert!(parse("filter widget").is_err());
    }

    #[test]
    fn unknown_commands_error_with_the_token() {
        let err = parse("frobnicate now").unwrap_err();
        assert!(err.to_string().contains("frobnicate"));
    }
}
