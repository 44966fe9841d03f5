//! Heuristic contradiction check between a statement and evidence.
//!
//! A crude textual veto, not a proof: any single rule firing is enough to
//! call the pair contradictory. It exists to demote verification results
//! when the retrieved excerpt plainly disagrees with the statement.

/// Does the evidence excerpt contradict the statement?
///
/// Rules, each sufficient on its own:
/// - statement claims "poorest" while the evidence says "wealthiest"
/// - statement is about a "capital" while the evidence says "not the capital"
/// - the evidence negates ("not"/"never") while the statement does not
pub fn check_contradiction(statement: &str, evidence_text: &str) -> bool {
    let statement = statement.to_lowercase();
    let evidence = evidence_text.to_lowercase();

    if statement.contains("poorest") && evidence.contains("wealthiest") {
        return true;
    }

    if statement.contains("capital") && evidence.contains("not the capital") {
        return true;
    }

    let negated = |text: &str| text.contains("not") || text.contains("never");
    if negated(&evidence) && !negated(&statement) {
        return true;
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wealth_contradiction() {
        assert!(check_contradiction(
            "Norway is the poorest country in Europe",
            "Norway is among the wealthiest countries in the world."
        ));
    }

    #[test]
    fn test_capital_contradiction() {
        assert!(check_contradiction(
            "Rajkot is the capital of India",
            "Rajkot is not the capital of India."
        ));
    }

    #[test]
    fn test_generic_negation() {
        assert!(check_contradiction(
            "Whales are fish",
            "Whales are not fish; they are mammals."
        ));
    }

    #[test]
    fn test_negation_in_both_is_not_a_contradiction() {
        assert!(!check_contradiction(
            "Pluto is not a planet",
            "Pluto is not classified as a planet."
        ));
    }

    #[test]
    fn test_agreement() {
        assert!(!check_contradiction(
            "Delhi is the capital of India",
            "Delhi is the capital of India and a major metropolis."
        ));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(check_contradiction(
            "The POOREST nation",
            "It is the WEALTHIEST nation."
        ));
    }
}
