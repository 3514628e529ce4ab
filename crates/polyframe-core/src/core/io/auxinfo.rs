use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuxParseError {
    #[error("Missing required field {field} in oracle result")]
    MissingField { field: &'static str },
    #[error("Invalid number '{token}' in field {field}")]
    InvalidNumber { field: &'static str, token: String },
    #[error("Mismatched parentheses in field {field}")]
    MismatchedParens { field: &'static str },
    #[error("Tuple with {n} numbers in field {field}; only 1 or 2 are allowed")]
    BadTupleArity { field: &'static str, n: usize },
    #[error("Field {field} is empty")]
    EmptyField { field: &'static str },
}

/// One `/z` entry: the oracle's per-unit annotation, a sequence of
/// parenthesized 1- or 2-number tuples in unit declaration order.
///
/// By convention the first tuple names the unit's cap pair and the remaining
/// tuples its candidate backbone atom pairs (a single number marks a
/// one-atom closure).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnitAnnotation {
    pub tuples: Vec<(usize, Option<usize>)>,
}

impl UnitAnnotation {
    /// The cap pair, when the annotation leads with a 2-number tuple.
    pub fn cap_pair(&self) -> Option<(usize, usize)> {
        match self.tuples.first() {
            Some(&(a, Some(b))) => Some((a, b)),
            _ => None,
        }
    }

    /// The backbone atom pairs following the cap tuple.
    pub fn backbone_pairs(&self) -> Vec<(usize, usize)> {
        self.tuples
            .iter()
            .skip(1)
            .filter_map(|&(a, b)| b.map(|b| (a, b)))
            .collect()
    }
}

/// The parsed oracle result consumed by fold and frame-shift planning.
///
/// The oracle emits `/E:` and `/z` in its own canonical numbering; `/N:`
/// is the key back to the input order. Both are resolved at this boundary:
/// every number in `equivalence_groups` and `unit_annotations` is a
/// 0-based graph index, and the rest of the crate never sees canonical or
/// 1-based numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OracleResult {
    /// `/N:` - original atom indices in canonical order.
    pub canonical_to_orig: Vec<usize>,
    /// `/E:` - equivalence groups; atoms not listed are singleton classes.
    pub equivalence_groups: Vec<Vec<usize>>,
    /// `/z` - per-unit annotations in unit declaration order.
    pub unit_annotations: Vec<UnitAnnotation>,
}

impl OracleResult {
    /// Parses the oracle's textual result.
    ///
    /// `/N:` is required; `/E:` and `/z` are optional and default to "all
    /// atoms are singleton classes" and "no unit annotations".
    ///
    /// # Arguments
    ///
    /// * `text` - The oracle's result string.
    ///
    /// # Errors
    ///
    /// Returns an [`AuxParseError`] if `/N:` is absent or any present field
    /// is garbled (bad digit, mismatched parentheses, empty field).
    pub fn parse(text: &str) -> Result<Self, AuxParseError> {
        let n_field = extract_field(text, "/N:")
            .ok_or(AuxParseError::MissingField { field: "/N:" })?;
        let canonical_to_orig = parse_number_list(n_field, "/N:")?;
        if canonical_to_orig.is_empty() {
            return Err(AuxParseError::EmptyField { field: "/N:" });
        }

        // /E: and /z numbers are canonical positions; resolve them to graph
        // indices through /N:
        let resolve = |canon: usize, field: &'static str| {
            canonical_to_orig
                .get(canon)
                .copied()
                .ok_or(AuxParseError::InvalidNumber {
                    field,
                    token: (canon + 1).to_string(),
                })
        };

        let equivalence_groups = match extract_field(text, "/E:") {
            Some(e_field) => parse_groups(e_field, "/E:")?
                .into_iter()
                .map(|group| {
                    group
                        .into_iter()
                        .map(|canon| resolve(canon, "/E:"))
                        .collect::<Result<Vec<usize>, _>>()
                })
                .collect::<Result<Vec<_>, _>>()?,
            None => Vec::new(),
        };

        let mut unit_annotations = match extract_field(text, "/z") {
            Some(z_field) => parse_unit_annotations(z_field)?,
            None => Vec::new(),
        };
        for annotation in &mut unit_annotations {
            for (a, b) in &mut annotation.tuples {
                *a = resolve(*a, "/z")?;
                if let Some(b) = b {
                    *b = resolve(*b, "/z")?;
                }
            }
        }

        Ok(Self {
            canonical_to_orig,
            equivalence_groups,
            unit_annotations,
        })
    }

    /// Inverts the canonical order: `map[orig_index] = canonical position`.
    pub fn orig_to_canonical(&self) -> Vec<Option<usize>> {
        let max = self
            .canonical_to_orig
            .iter()
            .copied()
            .max()
            .map(|m| m + 1)
            .unwrap_or(0);
        let mut map = vec![None; max];
        for (canon, &orig) in self.canonical_to_orig.iter().enumerate() {
            map[orig] = Some(canon);
        }
        map
    }

    /// Builds the dense per-atom equivalence-class table.
    ///
    /// Listed groups get class ids `0..g`; every unlisted atom gets a fresh
    /// singleton id after that, in index order, so the assignment is
    /// deterministic for a given input.
    ///
    /// # Arguments
    ///
    /// * `atom_count` - Number of atoms in the graph.
    pub fn atom_classes(&self, atom_count: usize) -> Vec<usize> {
        let mut classes = vec![usize::MAX; atom_count];
        for (class, group) in self.equivalence_groups.iter().enumerate() {
            for &atom in group {
                if atom < atom_count {
                    classes[atom] = class;
                }
            }
        }
        let mut next = self.equivalence_groups.len();
        for class in classes.iter_mut() {
            if *class == usize::MAX {
                *class = next;
                next += 1;
            }
        }
        classes
    }
}

/// Slices out a field's body: everything after `tag` up to the next `/` or
/// end of string.
fn extract_field<'a>(text: &'a str, tag: &str) -> Option<&'a str> {
    let start = text.find(tag)? + tag.len();
    let rest = &text[start..];
    let end = rest.find('/').unwrap_or(rest.len());
    Some(rest[..end].trim())
}

/// Converts a 1-based oracle number token to a 0-based index.
fn parse_index(token: &str, field: &'static str) -> Result<usize, AuxParseError> {
    let number: usize = token.trim().parse().map_err(|_| AuxParseError::InvalidNumber {
        field,
        token: token.trim().to_string(),
    })?;
    if number == 0 {
        return Err(AuxParseError::InvalidNumber {
            field,
            token: token.trim().to_string(),
        });
    }
    Ok(number - 1)
}

fn parse_number_list(body: &str, field: &'static str) -> Result<Vec<usize>, AuxParseError> {
    if body.is_empty() {
        return Ok(Vec::new());
    }
    body.split(',').map(|tok| parse_index(tok, field)).collect()
}

/// Parses a sequence of parenthesized tuples: `(1,2)(3)(4,5)`.
fn parse_groups(body: &str, field: &'static str) -> Result<Vec<Vec<usize>>, AuxParseError> {
    let mut groups = Vec::new();
    let mut rest = body.trim();
    while !rest.is_empty() {
        let Some(open) = rest.strip_prefix('(') else {
            return Err(AuxParseError::MismatchedParens { field });
        };
        let close = open
            .find(')')
            .ok_or(AuxParseError::MismatchedParens { field })?;
        let inner = &open[..close];
        if inner.trim().is_empty() {
            return Err(AuxParseError::EmptyField { field });
        }
        groups.push(parse_number_list(inner, field)?);
        rest = open[close + 1..].trim_start();
    }
    Ok(groups)
}

fn parse_unit_annotations(body: &str) -> Result<Vec<UnitAnnotation>, AuxParseError> {
    const FIELD: &str = "/z";
    let mut annotations = Vec::new();
    for entry in body.split(';') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        let mut tuples = Vec::new();
        for group in parse_groups(entry, FIELD)? {
            match group.as_slice() {
                &[a] => tuples.push((a, None)),
                &[a, b] => tuples.push((a, Some(b))),
                other => {
                    return Err(AuxParseError::BadTupleArity {
                        field: FIELD,
                        n: other.len(),
                    });
                }
            }
        }
        annotations.push(UnitAnnotation { tuples });
    }
    Ok(annotations)
}
