use crate::models::interview::{Speaker, Turn};

/// Ordered, append-only history of one practice session.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    pub fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// Empties the transcript. Only a session reset may call this.
    pub(crate) fn clear(&mut self) {
        self.turns.clear();
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// User turns that never received an AI reply (left behind by failed answers).
    pub fn unanswered(&self) -> usize {
        self.turns
            .windows(2)
            .filter(|pair| pair[0].speaker == Speaker::User && pair[1].speaker == Speaker::User)
            .count()
            + usize::from(self.last().is_some_and(|t| t.speaker == Speaker::User))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_preserves_order() {
        let mut transcript = Transcript::default();
        transcript.push(Turn::ai("Tell me about yourself"));
        transcript.push(Turn::user("I build compilers"));
        let texts: Vec<_> = transcript.turns().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["Tell me about yourself", "I build compilers"]);
    }

    #[test]
    fn test_unanswered_counts_orphaned_user_turns() {
        let mut transcript = Transcript::default();
        transcript.push(Turn::ai("Q1"));
        transcript.push(Turn::user("A1"));
        transcript.push(Turn::user("A1 again"));
        assert_eq!(transcript.unanswered(), 2);

        transcript.push(Turn::ai("Q2"));
        assert_eq!(transcript.unanswered(), 1);
    }

    #[test]
    fn test_clear_empties() {
        let mut transcript = Transcript::default();
        transcript.push(Turn::ai("Q1"));
        transcript.clear();
        assert!(transcript.is_empty());
        assert_eq!(transcript.unanswered(), 0);
    }
}
