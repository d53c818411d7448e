use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::tournament::{Fixture, PointsRules, TeamRegistry};

/// Everything the projection core needs, assembled and validated by the
/// front end: registered teams with seeded points, the unresolved fixture
/// list, the scoring rules and the favourite's id.
#[derive(Debug, Clone)]
pub struct Projection {
    pub registry: TeamRegistry,
    pub fixtures: Vec<Fixture>,
    pub rules: PointsRules,
    pub favourite: usize,
}

/// Read and parse an input file. See `parse_projection` for the format.
pub fn load_projection(path: &Path, verbose: bool) -> Result<Projection> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    parse_projection(&text, &path.display().to_string(), verbose)
}

/// Parse the section-based input format:
///
/// ```text
/// [team]      favourite team name (one line)
/// [points]    win/loss/other overrides, e.g. "win 3"
/// [table]     seeded standings, e.g. "IND 10"
/// [completed] played fixtures, "A,B" (A won) or "A=B" (draw)
/// [upcoming]  unplayed fixtures, same separators
/// ```
///
/// A blank line ends a section. Teams register on first mention. Fails fast
/// with a `origin:line` location on anything malformed.
pub fn parse_projection(text: &str, origin: &str, verbose: bool) -> Result<Projection> {
    let mut parser = Parser {
        origin,
        verbose,
        rules: PointsRules::default(),
        registry: TeamRegistry::new(),
        fixtures: Vec::new(),
        favourite_name: None,
    };
    parser.parse(text)?;
    parser.finish()
}

struct Parser<'a> {
    origin: &'a str,
    verbose: bool,
    rules: PointsRules,
    registry: TeamRegistry,
    fixtures: Vec<Fixture>,
    favourite_name: Option<String>,
}

impl Parser<'_> {
    fn parse(&mut self, text: &str) -> Result<()> {
        let lines: Vec<&str> = text.lines().collect();
        let mut idx = 0;
        while idx < lines.len() {
            let line = lines[idx].trim();
            let number = idx + 1;
            idx += 1;
            if line.is_empty() {
                continue;
            }
            let Some(section) = line.strip_prefix('[').and_then(|s| s.strip_suffix(']')) else {
                bail!(
                    "{}:{}: expected a section header, found '{}'",
                    self.origin,
                    number,
                    line
                );
            };
            match section {
                "team" => self.parse_favourite(&lines, &mut idx),
                "points" => self.parse_points(&lines, &mut idx)?,
                "table" => {
                    if !self.registry.is_empty() {
                        bail!(
                            "{}:{}: points table must come before any other team mention",
                            self.origin,
                            number
                        );
                    }
                    self.parse_table(&lines, &mut idx)?;
                }
                "completed" => {
                    if !self.registry.is_empty() {
                        bail!(
                            "{}:{}: completed fixtures must come before any other team mention",
                            self.origin,
                            number
                        );
                    }
                    self.parse_fixtures(&lines, &mut idx, true)?;
                }
                "upcoming" => self.parse_fixtures(&lines, &mut idx, false)?,
                other => bail!(
                    "{}:{}: unknown section '[{}]'",
                    self.origin,
                    number,
                    other
                ),
            }
        }
        Ok(())
    }

    fn parse_favourite(&mut self, lines: &[&str], idx: &mut usize) {
        while *idx < lines.len() && !lines[*idx].trim().is_empty() {
            self.favourite_name = Some(lines[*idx].trim().to_string());
            *idx += 1;
        }
        if self.verbose {
            if let Some(name) = &self.favourite_name {
                eprintln!("[INFO] favourite team set to '{name}'");
            }
        }
    }

    fn parse_points(&mut self, lines: &[&str], idx: &mut usize) -> Result<()> {
        while *idx < lines.len() && !lines[*idx].trim().is_empty() {
            let line = lines[*idx].trim();
            let number = *idx + 1;
            *idx += 1;
            let mut parts = line.split_whitespace();
            let outcome = parts.next().unwrap_or_default();
            let value = parts
                .next()
                .and_then(|raw| raw.parse::<i32>().ok())
                .with_context(|| {
                    format!(
                        "{}:{}: expected 'win', 'loss' or 'other' followed by an integer, found '{}'",
                        self.origin, number, line
                    )
                })?;
            match outcome {
                "win" => self.rules.win = value,
                "loss" => self.rules.loss = value,
                "other" => self.rules.other = value,
                _ => bail!(
                    "{}:{}: expected 'win', 'loss' or 'other', found '{}'",
                    self.origin,
                    number,
                    outcome
                ),
            }
        }
        if self.verbose {
            eprintln!(
                "[INFO] points set to win={} loss={} other={}",
                self.rules.win, self.rules.loss, self.rules.other
            );
        }
        Ok(())
    }

    fn parse_table(&mut self, lines: &[&str], idx: &mut usize) -> Result<()> {
        while *idx < lines.len() && !lines[*idx].trim().is_empty() {
            let line = lines[*idx].trim();
            let number = *idx + 1;
            *idx += 1;
            let mut parts = line.split_whitespace();
            let (Some(name), Some(raw)) = (parts.next(), parts.next()) else {
                bail!(
                    "{}:{}: expected a team name and an integer, found '{}'",
                    self.origin,
                    number,
                    line
                );
            };
            let points = raw.parse::<i32>().with_context(|| {
                format!(
                    "{}:{}: expected an integer after '{}', found '{}'",
                    self.origin, number, name, raw
                )
            })?;
            let tid = self.registry.register(name);
            self.registry.set_points(tid, points);
            if self.verbose {
                eprintln!("[INFO] recorded '{name}' with {points} points");
            }
        }
        Ok(())
    }

    fn parse_fixtures(&mut self, lines: &[&str], idx: &mut usize, completed: bool) -> Result<()> {
        while *idx < lines.len() && !lines[*idx].trim().is_empty() {
            let line = lines[*idx].trim();
            let number = *idx + 1;
            *idx += 1;
            let comma = line.find(',');
            let equals = line.find('=');
            let (sep, drawn) = match (comma, equals) {
                (Some(c), None) => (c, false),
                (None, Some(e)) => (e, true),
                // Both separators is ambiguous, neither is malformed.
                _ => bail!(
                    "{}:{}: expected two teams separated by either ',' or '=', found '{}'",
                    self.origin,
                    number,
                    line
                ),
            };
            let first = line[..sep].trim();
            let second = line[sep + 1..].trim();
            if first.is_empty() || second.is_empty() {
                bail!(
                    "{}:{}: expected a team name on both sides of '{}', found '{}'",
                    self.origin,
                    number,
                    &line[sep..=sep],
                    line
                );
            }
            if first == second {
                bail!(
                    "{}:{}: fixture pairs '{}' with itself",
                    self.origin,
                    number,
                    first
                );
            }
            let tid1 = self.registry.register(first);
            let tid2 = self.registry.register(second);
            if completed {
                if drawn {
                    self.registry.add_points(tid1, self.rules.other);
                    self.registry.add_points(tid2, self.rules.other);
                } else {
                    self.registry.add_points(tid1, self.rules.win);
                    self.registry.add_points(tid2, self.rules.loss);
                }
            } else {
                self.fixtures.push(Fixture::new(tid1, tid2));
            }
            if self.verbose {
                eprintln!("[INFO] recorded fixture between '{first}' and '{second}'");
            }
        }
        Ok(())
    }

    fn finish(self) -> Result<Projection> {
        let Some(name) = self.favourite_name else {
            bail!("{}: favourite team not specified", self.origin);
        };
        let Some(favourite) = self.registry.lookup(&name) else {
            bail!(
                "{}: favourite team '{}' never appears in the input",
                self.origin,
                name
            );
        };
        if self.fixtures.is_empty() {
            bail!("{}: upcoming fixtures not specified", self.origin);
        }
        if !self.fixtures.iter().any(|f| f.involves(favourite)) {
            bail!(
                "{}: favourite team '{}' has no upcoming fixtures to win",
                self.origin,
                name
            );
        }
        Ok(Projection {
            registry: self.registry,
            fixtures: self.fixtures,
            rules: self.rules,
            favourite,
        })
    }
}
