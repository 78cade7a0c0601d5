//! Path queries over the item tree.
//!
//! A query is an absolute path of `/`-separated steps. Each step is an item
//! name (matched ignoring case), `*` for any child, `.` for the current item
//! or `..` for the parent, optionally followed by one field predicate:
//!
//! ```text
//! /sitecore/content/home/*[@Category='news']
//! ```

use crate::tree::Tree;
use sapling_core::{Error, Result};

use uuid::Uuid;

#[derive(Debug, PartialEq)]
pub(crate) struct Query {
    steps: Vec<Step>,
}

#[derive(Debug, PartialEq)]
struct Step {
    axis: Axis,
    predicate: Option<Predicate>,
}

#[derive(Debug, PartialEq)]
enum Axis {
    Name(String),
    AnyChild,
    Current,
    Parent,
}

#[derive(Debug, PartialEq)]
struct Predicate {
    field: String,
    value: String,
}

impl Query {
    pub(crate) fn parse(query: &str) -> Result<Self> {
        let trimmed = query.trim();

        if trimmed.is_empty() {
            return Err(Error::query_syntax(query, "empty query"));
        }

        let Some(rest) = trimmed.strip_prefix('/') else {
            return Err(Error::query_syntax(query, "query must start with `/`"));
        };

        let steps = split_steps(query, rest)?
            .into_iter()
            .map(|step| parse_step(query, step))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { steps })
    }

    /// Evaluates the query, returning matching item identifiers in tree
    /// order without duplicates.
    pub(crate) fn eval(&self, tree: &Tree) -> Vec<Uuid> {
        // `None` stands for the position above the root item
        let mut current: Vec<Option<Uuid>> = vec![None];

        for step in &self.steps {
            let mut next = vec![];

            for position in &current {
                let candidates: Vec<Option<Uuid>> = match (&step.axis, position) {
                    (Axis::Current, _) => vec![*position],
                    (Axis::Parent, Some(id)) => vec![tree.parent(*id)],
                    (Axis::Parent, None) => vec![],
                    (Axis::AnyChild | Axis::Name(_), None) => vec![Some(tree.root())],
                    (Axis::AnyChild | Axis::Name(_), Some(id)) => {
                        tree.children(*id).iter().copied().map(Some).collect()
                    }
                };

                for candidate in candidates {
                    if step.matches(tree, candidate) && !next.contains(&candidate) {
                        next.push(candidate);
                    }
                }
            }

            current = next;
        }

        current.into_iter().flatten().collect()
    }
}

impl Step {
    fn matches(&self, tree: &Tree, position: Option<Uuid>) -> bool {
        let Some(item) = position.and_then(|id| tree.get(id)) else {
            // Only `.` and `..` can stay above the root, and there is nothing
            // there to match a predicate against.
            return self.predicate.is_none() && matches!(self.axis, Axis::Current | Axis::Parent);
        };

        if let Axis::Name(name) = &self.axis {
            if !item.name.eq_ignore_ascii_case(name) {
                return false;
            }
        }

        match &self.predicate {
            Some(predicate) => item.field_or_empty(&predicate.field) == predicate.value,
            None => true,
        }
    }
}

/// Splits on `/`, ignoring separators inside predicates.
fn split_steps<'a>(query: &str, rest: &'a str) -> Result<Vec<&'a str>> {
    let mut steps = vec![];
    let mut start = 0;
    let mut in_predicate = false;
    let mut quote = None;

    for (i, c) in rest.char_indices() {
        match (c, quote) {
            ('\'' | '"', None) if in_predicate => quote = Some(c),
            (c, Some(q)) if c == q => quote = None,
            (_, Some(_)) => {}
            ('[', None) => {
                if in_predicate {
                    return Err(Error::query_syntax(query, "nested `[`"));
                }
                in_predicate = true;
            }
            (']', None) => {
                if !in_predicate {
                    return Err(Error::query_syntax(query, "unbalanced `]`"));
                }
                in_predicate = false;
            }
            ('/', None) if !in_predicate => {
                steps.push(&rest[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }

    if quote.is_some() {
        return Err(Error::query_syntax(query, "unterminated string"));
    }

    if in_predicate {
        return Err(Error::query_syntax(query, "unbalanced `[`"));
    }

    steps.push(&rest[start..]);
    Ok(steps)
}

fn parse_step(query: &str, step: &str) -> Result<Step> {
    let (head, predicate) = match step.find('[') {
        Some(open) => {
            let Some(body) = step[open..]
                .strip_prefix('[')
                .and_then(|s| s.strip_suffix(']'))
            else {
                return Err(Error::query_syntax(
                    query,
                    format!("unexpected characters after predicate in `{step}`"),
                ));
            };
            (&step[..open], Some(parse_predicate(query, body)?))
        }
        None => (step, None),
    };

    let head = head.trim();
    let axis = match head {
        "" => return Err(Error::query_syntax(query, "empty path segment")),
        "*" => Axis::AnyChild,
        "." => Axis::Current,
        ".." => Axis::Parent,
        name => Axis::Name(name.to_string()),
    };

    Ok(Step { axis, predicate })
}

fn parse_predicate(query: &str, body: &str) -> Result<Predicate> {
    let malformed = || {
        Error::query_syntax(
            query,
            format!("malformed predicate `[{body}]`, expected `[@Field='value']`"),
        )
    };

    let body = body.trim();
    let (field, value) = body
        .strip_prefix('@')
        .and_then(|rest| rest.split_once('='))
        .ok_or_else(malformed)?;

    let field = field.trim();
    if field.is_empty() {
        return Err(malformed());
    }

    let value = value.trim();
    let unquoted = value
        .strip_prefix('\'')
        .and_then(|v| v.strip_suffix('\''))
        .or_else(|| value.strip_prefix('"').and_then(|v| v.strip_suffix('"')))
        .ok_or_else(malformed)?;

    Ok(Predicate {
        field: field.to_string(),
        value: unquoted.to_string(),
    })
}
