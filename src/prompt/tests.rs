//! Tests for the prompt workflow.

use super::*;
use std::io::Cursor;

type ScriptedPrompter = Prompter<ReaderLines<Cursor<&'static str>>, Vec<u8>>;

fn scripted(input: &'static str) -> ScriptedPrompter {
    Prompter::new(
        ReaderLines::new(Cursor::new(input)),
        Vec::new(),
        Interrupt::new(),
    )
    .with_current_year("2026")
}

fn output_of(prompter: ScriptedPrompter) -> String {
    String::from_utf8(prompter.into_output()).unwrap()
}

/// A source that yields its lines and then reports an interrupt.
struct InterruptAfter {
    lines: Vec<&'static str>,
}

impl LineSource for InterruptAfter {
    fn next_line(&mut self) -> Result<Line> {
        if self.lines.is_empty() {
            Ok(Line::Interrupted)
        } else {
            Ok(Line::Text(self.lines.remove(0).to_string()))
        }
    }
}

#[test]
fn test_collect_problem_happy_path() {
    let mut prompter = scripted("2023\na\ndiv2\nTwo Sum\nhttps://codeforces.com/problemset/problem/1/A\n");

    let problem = match prompter.collect_problem().unwrap() {
        Prompted::Value(problem) => problem,
        other => panic!("expected a problem, got {:?}", other),
    };

    assert_eq!(problem.year, "2023");
    assert_eq!(problem.round, "A");
    assert_eq!(problem.slug, "div2");
    assert_eq!(problem.name, "Two Sum");
    assert_eq!(problem.link, "https://codeforces.com/problemset/problem/1/A");

    let output = output_of(prompter);
    assert_eq!(output, "Year: Round: Folder: Name: URL: ");
}

#[test]
fn test_values_are_trimmed() {
    let mut prompter = scripted("  2023  \n\t b \n div2 \n  Two Sum  \n   \n");

    let Prompted::Value(problem) = prompter.collect_problem().unwrap() else {
        panic!("expected a problem");
    };

    assert_eq!(problem.year, "2023");
    assert_eq!(problem.round, "B");
    assert_eq!(problem.slug, "div2");
    assert_eq!(problem.name, "Two Sum");
    assert_eq!(problem.link, "");
}

#[test]
fn test_blank_year_uses_current_year() {
    let mut prompter = scripted("\n");
    assert_eq!(
        prompter.read_year().unwrap(),
        Prompted::Value("2026".to_string())
    );
}

#[test]
fn test_tmp_year_is_accepted() {
    let mut prompter = scripted("tmp\n");
    assert_eq!(prompter.read_year().unwrap(), Prompted::Value("tmp".to_string()));
}

#[test]
fn test_bad_year_reprompts() {
    let mut prompter = scripted("1999\n2023x\n2024\n");

    assert_eq!(prompter.read_year().unwrap(), Prompted::Value("2024".to_string()));

    let output = output_of(prompter);
    assert_eq!(
        output,
        "Year: Bad input year: 1999\nYear: Bad input year: 2023x\nYear: "
    );
}

#[test]
fn test_round_is_uppercased() {
    let mut prompter = scripted("div2e\n");
    assert_eq!(
        prompter.read_round().unwrap(),
        Prompted::Value("DIV2E".to_string())
    );
}

#[test]
fn test_bad_round_reprompts() {
    let mut prompter = scripted("\nround-one\nr1\n");

    assert_eq!(prompter.read_round().unwrap(), Prompted::Value("R1".to_string()));

    let output = output_of(prompter);
    assert!(output.contains("Bad input round: \n"));
    assert!(output.contains("Bad input round: round-one\n"));
}

#[test]
fn test_bad_folder_reprompts() {
    let mut prompter = scripted("two sum\ntwo-sum\n");

    assert_eq!(
        prompter.read_folder().unwrap(),
        Prompted::Value("two-sum".to_string())
    );
    assert!(output_of(prompter).contains("Bad input folder: two sum\n"));
}

#[test]
fn test_bad_name_reprompts() {
    let mut prompter = scripted("Tom's Problem\nToms Problem\n");

    assert_eq!(
        prompter.read_name().unwrap(),
        Prompted::Value("Toms Problem".to_string())
    );
    assert!(output_of(prompter).contains("Bad input name: Tom's Problem\n"));
}

#[test]
fn test_link_accepts_anything() {
    let mut prompter = scripted("<not a url>\n");
    assert_eq!(
        prompter.read_link().unwrap(),
        Prompted::Value("<not a url>".to_string())
    );
}

#[test]
fn test_rejection_does_not_revisit_earlier_fields() {
    let mut prompter = scripted("2023\nA\nbad folder\ngood\nName\n\n");

    let Prompted::Value(problem) = prompter.collect_problem().unwrap() else {
        panic!("expected a problem");
    };
    assert_eq!(problem.slug, "good");

    let output = output_of(prompter);
    assert_eq!(output.matches("Year: ").count(), 1);
    assert_eq!(output.matches("Round: ").count(), 1);
    assert_eq!(output.matches("Folder: ").count(), 2);
}

#[test]
fn test_end_of_input_at_each_prompt() {
    let scripts = [
        "",
        "2023\n",
        "2023\nA\n",
        "2023\nA\ndiv2\n",
        "2023\nA\ndiv2\nTwo Sum\n",
    ];

    for script in scripts {
        let mut prompter = scripted(script);
        assert_eq!(
            prompter.collect_problem().unwrap(),
            Prompted::Ended(EndReason::EndOfInput),
            "script {:?}",
            script
        );
    }
}

#[test]
fn test_end_of_input_while_retrying() {
    let mut prompter = scripted("2023\n!!!\n");
    assert_eq!(
        prompter.collect_problem().unwrap(),
        Prompted::Ended(EndReason::EndOfInput)
    );
}

#[test]
fn test_end_of_input_leaves_fresh_line() {
    let mut prompter = scripted("");
    prompter.collect_problem().unwrap();
    assert_eq!(output_of(prompter), "Year: \n");
}

#[test]
fn test_interrupt_from_source() {
    let mut prompter = Prompter::new(
        InterruptAfter {
            lines: vec!["2023", "A"],
        },
        Vec::new(),
        Interrupt::new(),
    );

    assert_eq!(
        prompter.collect_problem().unwrap(),
        Prompted::Ended(EndReason::Interrupted)
    );
}

#[test]
fn test_raised_interrupt_stops_before_reading() {
    let interrupt = Interrupt::new();
    interrupt.raise();
    let mut prompter = Prompter::new(
        ReaderLines::new(Cursor::new("2023\nA\ndiv2\nTwo Sum\n\n")),
        Vec::new(),
        interrupt,
    );

    assert_eq!(
        prompter.collect_problem().unwrap(),
        Prompted::Ended(EndReason::Interrupted)
    );
}
