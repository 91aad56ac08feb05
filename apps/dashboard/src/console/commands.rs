#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Courses,
    Jobs,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Analyze(String),
    Careers {
        skills: String,
        interests: String,
        budget: String,
    },
    Budgets,
    Show(ListKind),
    Retry(ListKind),
    InterviewStart,
    Answer(String),
    InterviewReset,
    Transcript,
    Progress,
    Insights,
    Quit,
}

pub const USAGE: &str = "\
Commands:
  analyze <skill, skill, ...>                   analyze your current skills
  careers <skills> | <interests> [| <budget>]   get career recommendations
  budgets                                       list learning budget options
  courses                                       show course suggestions
  jobs                                          show matching jobs
  retry courses|jobs                            fetch the list again
  interview start                               begin a mock interview
  answer <text>                                 answer the current question
  interview reset                               clear the interview
  transcript                                    show the interview so far
  progress                                      show your progress
  insights                                      show job market insights
  help                                          show this help
  quit                                          exit";

/// Parses one input line. Blank lines yield `Ok(None)`; the argument text of
/// `analyze`, `careers` and `answer` is passed through untouched for the page
/// to validate.
pub fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb.to_lowercase().as_str() {
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        "analyze" => Command::Analyze(rest.to_string()),
        "careers" => {
            let mut parts = rest.splitn(3, '|').map(str::trim);
            Command::Careers {
                skills: parts.next().unwrap_or_default().to_string(),
                interests: parts.next().unwrap_or_default().to_string(),
                budget: parts.next().unwrap_or_default().to_string(),
            }
        }
        "budgets" => Command::Budgets,
        "courses" => Command::Show(ListKind::Courses),
        "jobs" => Command::Show(ListKind::Jobs),
        "retry" => Command::Retry(parse_list_kind(rest)?),
        "interview" => match rest.to_lowercase().as_str() {
            "start" => Command::InterviewStart,
            "reset" => Command::InterviewReset,
            other => return Err(format!("Unknown interview action '{other}'")),
        },
        "answer" => Command::Answer(rest.to_string()),
        "transcript" => Command::Transcript,
        "progress" => Command::Progress,
        "insights" | "market" => Command::Insights,
        other => return Err(format!("Unknown command '{other}'")),
    };
    Ok(Some(command))
}

fn parse_list_kind(text: &str) -> Result<ListKind, String> {
    match text.to_lowercase().as_str() {
        "courses" => Ok(ListKind::Courses),
        "jobs" => Ok(ListKind::Jobs),
        other => Err(format!("Cannot retry '{other}'; use 'retry courses' or 'retry jobs'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_line_is_nothing() {
        assert_eq!(parse_command("   "), Ok(None));
    }

    #[test]
    fn test_analyze_keeps_raw_argument() {
        assert_eq!(
            parse_command("analyze Python, React, , SQL"),
            Ok(Some(Command::Analyze("Python, React, , SQL".to_string())))
        );
        assert_eq!(parse_command("analyze"), Ok(Some(Command::Analyze(String::new()))));
    }

    #[test]
    fn test_careers_splits_on_pipes() {
        assert_eq!(
            parse_command("careers Python, SQL | data, AI | 1000"),
            Ok(Some(Command::Careers {
                skills: "Python, SQL".to_string(),
                interests: "data, AI".to_string(),
                budget: "1000".to_string(),
            }))
        );
        assert_eq!(
            parse_command("careers Rust"),
            Ok(Some(Command::Careers {
                skills: "Rust".to_string(),
                interests: String::new(),
                budget: String::new(),
            }))
        );
    }

    #[test]
    fn test_interview_and_retry_subcommands() {
        assert_eq!(parse_command("Interview START"), Ok(Some(Command::InterviewStart)));
        assert_eq!(parse_command("interview reset"), Ok(Some(Command::InterviewReset)));
        assert_eq!(
            parse_command("retry jobs"),
            Ok(Some(Command::Retry(ListKind::Jobs)))
        );
        assert!(parse_command("retry careers").is_err());
        assert!(parse_command("interview pause").is_err());
    }

    #[test]
    fn test_answer_keeps_text() {
        assert_eq!(
            parse_command("answer I have 3 years experience"),
            Ok(Some(Command::Answer("I have 3 years experience".to_string())))
        );
    }

    #[test]
    fn test_insights_aliases() {
        assert_eq!(parse_command("insights"), Ok(Some(Command::Insights)));
        assert_eq!(parse_command("MARKET"), Ok(Some(Command::Insights)));
    }

    #[test]
    fn test_unknown_command_is_error() {
        assert!(parse_command("dance").is_err());
    }
}
