use std::str::FromStr;
use std::time::Duration;

use crate::error::EventParseError;
use crate::validation::Field;

/// Everything a user (or script) can do to the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    ToggleTheme,
    KeyDown(String),
    KeyUp(String),
    Click,
    MouseOver,
    MouseOut,
    DoubleClick,
    Increment,
    Decrement,
    ResetCounter,
    /// Zero-based FAQ entry.
    ToggleFaq(usize),
    /// Panel id of the tab.
    SelectTab(String),
    Input { field: Field, value: String },
    Submit,
    /// Let virtual time pass.
    Wait(Duration),
}

/// Parses one script line.
///
/// ```text
/// theme | keydown <key> | keyup <key> | click | mouseover | mouseout | dblclick
/// increment | decrement | reset-counter | faq <n> | tab <name>
/// input <field> [value...] | submit | wait <ms>
/// ```
///
/// FAQ entries are numbered from 1 in scripts. An input value is everything
/// after the field and one space, so interior and trailing spaces survive.
impl FromStr for PageEvent {
    type Err = EventParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_start();
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));

        let event = match command {
            "" => return Err(EventParseError::Empty),
            "theme" => PageEvent::ToggleTheme,
            "keydown" => PageEvent::KeyDown(argument(rest, "keydown", "a key")?),
            "keyup" => PageEvent::KeyUp(argument(rest, "keyup", "a key")?),
            "click" => PageEvent::Click,
            "mouseover" => PageEvent::MouseOver,
            "mouseout" => PageEvent::MouseOut,
            "dblclick" => PageEvent::DoubleClick,
            "increment" => PageEvent::Increment,
            "decrement" => PageEvent::Decrement,
            "reset-counter" => PageEvent::ResetCounter,
            "faq" => {
                let n = argument(rest, "faq", "an entry number")?;
                match n.parse::<usize>() {
                    Ok(n) if n > 0 => PageEvent::ToggleFaq(n - 1),
                    _ => return Err(EventParseError::InvalidNumber(n)),
                }
            }
            "tab" => PageEvent::SelectTab(argument(rest, "tab", "a tab name")?),
            "input" => {
                let (field, value) = rest.split_once(' ').unwrap_or((rest, ""));
                if field.is_empty() {
                    return Err(EventParseError::missing("input", "a field"));
                }
                PageEvent::Input {
                    field: field.parse()?,
                    value: value.to_string(),
                }
            }
            "submit" => PageEvent::Submit,
            "wait" => {
                let ms = argument(rest, "wait", "milliseconds")?;
                let ms = ms
                    .parse::<u64>()
                    .map_err(|_| EventParseError::InvalidNumber(ms.clone()))?;
                PageEvent::Wait(Duration::from_millis(ms))
            }
            other => return Err(EventParseError::UnknownCommand(other.to_string())),
        };
        Ok(event)
    }
}

fn argument(
    rest: &str,
    command: &'static str,
    expected: &'static str,
) -> Result<String, EventParseError> {
    let rest = rest.trim();
    if rest.is_empty() {
        Err(EventParseError::missing(command, expected))
    } else {
        Ok(rest.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<PageEvent, EventParseError> {
        line.parse()
    }

    #[test]
    fn test_simple_commands() {
        assert_eq!(parse("theme"), Ok(PageEvent::ToggleTheme));
        assert_eq!(parse("dblclick"), Ok(PageEvent::DoubleClick));
        assert_eq!(parse("  submit"), Ok(PageEvent::Submit));
        assert_eq!(parse("reset-counter"), Ok(PageEvent::ResetCounter));
    }

    #[test]
    fn test_input_keeps_spaces() {
        assert_eq!(
            parse("input name Jane Doe "),
            Ok(PageEvent::Input {
                field: Field::Name,
                value: "Jane Doe ".into()
            })
        );
        assert_eq!(
            parse("input confirmPassword"),
            Ok(PageEvent::Input {
                field: Field::ConfirmPassword,
                value: String::new()
            })
        );
    }

    #[test]
    fn test_faq_is_one_based() {
        assert_eq!(parse("faq 1"), Ok(PageEvent::ToggleFaq(0)));
        assert_eq!(
            parse("faq 0"),
            Err(EventParseError::InvalidNumber("0".into()))
        );
    }

    #[test]
    fn test_wait() {
        assert_eq!(
            parse("wait 2000"),
            Ok(PageEvent::Wait(Duration::from_millis(2000)))
        );
        assert_eq!(
            parse("wait soon"),
            Err(EventParseError::InvalidNumber("soon".into()))
        );
    }

    #[test]
    fn test_errors() {
        assert_eq!(parse(""), Err(EventParseError::Empty));
        assert_eq!(
            parse("jump"),
            Err(EventParseError::UnknownCommand("jump".into()))
        );
        assert_eq!(
            parse("keydown"),
            Err(EventParseError::missing("keydown", "a key"))
        );
        assert_eq!(
            parse("input"),
            Err(EventParseError::missing("input", "a field"))
        );
        assert_eq!(
            parse("input age 12"),
            Err(EventParseError::UnknownField("age".into()))
        );
    }
}
