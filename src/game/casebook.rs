//! The casebook: which suspect each kind of clue implicates
//!
//! An ordered list of marker rules. A clue implicates the suspect of the
//! first rule whose marker appears anywhere in its text; a clue matching
//! no rule implicates nobody.

use crate::data::SuspectName;
use crate::QuestError;

#[derive(Debug, Clone)]
struct CasebookRule {
    marker: String,
    suspect: SuspectName,
}

/// The fixed marker-to-suspect table consulted when a clue is found.
#[derive(Debug, Clone, Default)]
pub struct Casebook {
    rules: Vec<CasebookRule>,
}

impl Casebook {
    pub fn new() -> Self {
        Self::default()
    }

    /// The casebook of the classic mansion case.
    pub fn classic() -> Result<Self, QuestError> {
        let mut book = Casebook::new();
        book.add_rule("Livro", "Mordomo")?;
        book.add_rule("Faca", "Cozinheiro")?;
        book.add_rule("Carta", "Herdeira")?;
        book.add_rule("Pegadas", "Jardineiro")?;
        Ok(book)
    }

    /// Append a rule. Rules are consulted in the order they were added.
    pub fn add_rule(&mut self, marker: &str, suspect: &str) -> Result<(), QuestError> {
        self.rules.push(CasebookRule {
            marker: marker.to_string(),
            suspect: SuspectName::new(suspect)?,
        });
        Ok(())
    }

    /// The suspect implicated by a clue: first rule whose marker occurs in
    /// the clue text wins.
    pub fn suspect_for(&self, clue: &str) -> Option<&SuspectName> {
        self.rules
            .iter()
            .find(|rule| clue.contains(&rule.marker))
            .map(|rule| &rule.suspect)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_casebook_names_all_four_suspects() {
        let book = Casebook::classic().unwrap();

        assert_eq!(
            book.suspect_for("Livro rasgado com sangue").map(|s| s.as_str()),
            Some("Mordomo")
        );
        assert_eq!(
            book.suspect_for("Faca desaparecida").map(|s| s.as_str()),
            Some("Cozinheiro")
        );
        assert_eq!(
            book.suspect_for("Carta suspeita").map(|s| s.as_str()),
            Some("Herdeira")
        );
        assert_eq!(
            book.suspect_for("Pegadas estranhas").map(|s| s.as_str()),
            Some("Jardineiro")
        );
    }

    #[test]
    fn unmatched_clue_implicates_nobody() {
        let book = Casebook::classic().unwrap();
        assert_eq!(book.suspect_for("Copo quebrado"), None);
        assert_eq!(book.suspect_for(""), None);
    }

    #[test]
    fn marker_matches_anywhere_in_the_text() {
        let book = Casebook::classic().unwrap();
        assert_eq!(
            book.suspect_for("Um Livro sobre a mesa").map(|s| s.as_str()),
            Some("Mordomo")
        );
        // Match is case sensitive.
        assert_eq!(book.suspect_for("um livro sobre a mesa"), None);
    }

    #[test]
    fn earlier_rule_wins_when_several_match() {
        let mut book = Casebook::new();
        book.add_rule("Carta", "Herdeira").unwrap();
        book.add_rule("suspeita", "Mordomo").unwrap();

        assert_eq!(
            book.suspect_for("Carta suspeita").map(|s| s.as_str()),
            Some("Herdeira")
        );
    }
}
