use std::ops::ControlFlow;

/// Reveals a fixed string one `char` per tick. Never loops, never deletes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typewriter {
    text: String,
    /// Byte offset of the end of the revealed prefix, always on a char boundary
    shown: usize,
}

impl Typewriter {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            shown: 0,
        }
    }

    /// The revealed prefix.
    pub fn visible(&self) -> &str {
        &self.text[..self.shown]
    }

    pub fn is_complete(&self) -> bool {
        self.shown == self.text.len()
    }

    /// Reveal the next character. Breaks when nothing is left to type,
    /// including on the tick that reveals the last character.
    pub fn tick(&mut self) -> ControlFlow<()> {
        if let Some(next) = self.text[self.shown..].chars().next() {
            self.shown += next.len_utf8();
        }
        if self.is_complete() {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TAGLINE: &str = "Learn. Grow. Achieve.";

    #[test]
    fn types_full_text_in_len_ticks() {
        let mut typer = Typewriter::new(TAGLINE);
        let mut ticks = 0;
        loop {
            ticks += 1;
            if typer.tick().is_break() {
                break;
            }
        }
        assert_eq!(ticks, TAGLINE.chars().count());
        assert_eq!(typer.visible(), TAGLINE);
    }

    #[test]
    fn prefix_grows_by_one_char() {
        let mut typer = Typewriter::new(TAGLINE);
        assert_eq!(typer.visible(), "");
        let _ = typer.tick();
        let _ = typer.tick();
        assert_eq!(typer.visible(), "Le");
        assert!(!typer.is_complete());
    }

    #[test]
    fn further_ticks_are_inert() {
        let mut typer = Typewriter::new("ok");
        let _ = typer.tick();
        assert!(typer.tick().is_break());
        assert!(typer.tick().is_break());
        assert_eq!(typer.visible(), "ok");
    }

    #[test]
    fn multibyte_chars_are_not_split() {
        let mut typer = Typewriter::new("Zażółć");
        for _ in 0..3 {
            let _ = typer.tick();
        }
        assert_eq!(typer.visible(), "Zaż");
    }

    #[test]
    fn empty_text_is_already_complete() {
        let mut typer = Typewriter::new("");
        assert!(typer.is_complete());
        assert!(typer.tick().is_break());
    }
}
