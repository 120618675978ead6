//! Quiz command handler
//!
//! Runs one timed session on the terminal. A reader thread forwards stdin
//! lines and a [`Ticker`] forwards countdown ticks into the same channel,
//! so every state change happens on this thread through the store.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use anyhow::Result;
use tracing::debug;

use studybuddy::progress::ProgressSnapshot;
use studybuddy::quiz::{bank, AnswerOutcome, Difficulty, QuizEvent, Step, Ticker};
use studybuddy::response::{Question, ResponseParser};
use studybuddy::{Config, StudyStore};

use super::{content_generator, load_document, read_reply};

/// Messages driving the session loop.
enum Input {
    Line(String),
    Eof,
    Tick(u64),
}

/// How the wait for an answer ended.
enum Answer {
    Scored(AnswerOutcome),
    TimedOut(AnswerOutcome),
}

/// Where the questions of a session come from.
#[derive(Clone, Copy)]
pub enum QuizSource<'a> {
    /// The built-in bank at a starting tier.
    Bank(Difficulty),
    /// A saved completion reply.
    Reply(&'a Path),
    /// A quiz generated by the completion command over a document.
    Remote { document: &'a Path, config_path: &'a Path },
}

/// Run an interactive quiz and print progress afterwards.
#[cfg(not(tarpaulin_include))]
pub fn handle(config: &Config, subject: Option<&str>, source: QuizSource<'_>) -> Result<()> {
    let requested = subject.unwrap_or(&config.quiz.default_subject);
    // Results are tracked under the bank's spelling of the subject
    let subject = bank::canonical_subject(requested)
        .map_or_else(|| requested.trim().to_string(), str::to_string);

    let quiz = match source {
        QuizSource::Bank(difficulty) => bank::questions_for(&subject, difficulty),
        QuizSource::Reply(path) => ResponseParser.parse_quiz(&read_reply(path)?),
        QuizSource::Remote {
            document,
            config_path,
        } => {
            let generator = content_generator(config, config_path)?;
            generator.generate_quiz(load_document(document)?.text())?
        }
    };

    if quiz.is_empty() {
        match source {
            QuizSource::Bank(_) => println!("No built-in questions for subject '{}'.", subject),
            QuizSource::Reply(path) => {
                println!("No usable questions found in {}.", path.display())
            }
            QuizSource::Remote { .. } => {
                println!("No usable questions found in the completion reply.")
            }
        }
        return Ok(());
    }

    let mut store = StudyStore::new(config.quiz_engine(), config.progress_aggregator());
    let (tx, rx) = mpsc::channel();
    spawn_stdin_reader(tx.clone());

    println!(
        "{} quiz: {} questions, {} ticks per question",
        subject,
        quiz.len(),
        config.quiz.time_limit
    );
    store.start_quiz(quiz, subject)?;
    run_session(config, &mut store, &tx, &rx)?;

    println!();
    println!("{}", render_progress(&store.progress()));
    Ok(())
}

fn spawn_stdin_reader(tx: Sender<Input>) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(Input::Line(line)).is_err() {
                return;
            }
        }
        let _ = tx.send(Input::Eof);
    });
}

fn run_session(
    config: &Config,
    store: &mut StudyStore,
    tx: &Sender<Input>,
    rx: &Receiver<Input>,
) -> Result<()> {
    let mut eof = false;

    loop {
        let Some(session) = store.session() else {
            return Ok(());
        };
        let Some(question) = session.current_question() else {
            return Ok(());
        };
        let generation = session.generation();
        println!();
        println!(
            "{}",
            render_question(
                session.index(),
                session.quiz().len(),
                session.difficulty(),
                question
            )
        );

        let answer = if eof {
            Answer::Scored(submit(store, None)?)
        } else {
            let ticker = Ticker::spawn(
                config.tick_interval(),
                generation,
                tx.clone(),
                Input::Tick,
            );
            let answer = wait_for_answer(store, rx, &mut eof)?;
            drop(ticker);
            answer
        };

        match answer {
            Answer::Scored(outcome) => println!("{}", render_outcome(&outcome, store)),
            Answer::TimedOut(outcome) => {
                println!("Time's up!");
                println!("{}", render_outcome(&outcome, store));
            }
        }

        if let Step::Completed(summary) = store.dispatch(QuizEvent::Advance)? {
            println!();
            println!(
                "Quiz complete: {}/{} correct ({}%)",
                store.session().map_or(0, |s| s.score()),
                summary.result.questions,
                summary.result.score
            );
            if let Some(session) = store.session() {
                println!("Final difficulty: {}", session.difficulty());
            }
            return Ok(());
        }
    }
}

fn submit(store: &mut StudyStore, answer: Option<usize>) -> Result<AnswerOutcome> {
    match store.dispatch(QuizEvent::Submit(answer))? {
        Step::Answered(outcome) => Ok(outcome),
        other => anyhow::bail!("unexpected quiz step after submit: {:?}", other),
    }
}

fn wait_for_answer(store: &mut StudyStore, rx: &Receiver<Input>, eof: &mut bool) -> Result<Answer> {
    prompt();
    loop {
        let Ok(input) = rx.recv() else {
            *eof = true;
            return submit(store, None).map(Answer::Scored);
        };
        match input {
            Input::Tick(generation) => match store.dispatch(QuizEvent::Tick { generation })? {
                Step::TimedOut(outcome) => return Ok(Answer::TimedOut(outcome)),
                step => debug!(?step, "tick"),
            },
            Input::Line(line) => match parse_answer(&line) {
                Some(index) => return submit(store, Some(index)).map(Answer::Scored),
                None => {
                    println!("Please answer with A, B, C or D.");
                    prompt();
                }
            },
            Input::Eof => {
                *eof = true;
                return submit(store, None).map(Answer::Scored);
            }
        }
    }
}

fn prompt() {
    print!("Answer (A-D): ");
    let _ = io::stdout().flush();
}

/// Parse `A`-`D` (any case, optionally followed by `)` and text) or `1`-`4`.
pub fn parse_answer(line: &str) -> Option<usize> {
    let first = line.trim().chars().next()?;
    match first.to_ascii_uppercase() {
        c @ 'A'..='D' => Some(c as usize - 'A' as usize),
        c @ '1'..='4' => Some(c as usize - '1' as usize),
        _ => None,
    }
}

fn option_letter(index: usize) -> char {
    (b'A' + index as u8) as char
}

/// Option text with its letter, unless the text already carries it.
pub fn option_label(index: usize, option: &str) -> String {
    let prefix = format!("{})", option_letter(index));
    if option.starts_with(&prefix) {
        option.to_string()
    } else {
        format!("{} {}", prefix, option)
    }
}

pub fn render_question(index: usize, total: usize, difficulty: Difficulty, question: &Question) -> String {
    let mut lines = vec![format!(
        "Question {}/{} [{}]: {}",
        index + 1,
        total,
        difficulty,
        question.text()
    )];
    for (i, option) in question.options().iter().enumerate() {
        lines.push(format!("  {}", option_label(i, option)));
    }
    lines.join("\n")
}

fn render_outcome(outcome: &AnswerOutcome, store: &StudyStore) -> String {
    let correct_option = store
        .session()
        .and_then(|s| s.quiz().get(outcome.index))
        .and_then(|q| q.options().get(outcome.correct_index))
        .map(|o| option_label(outcome.correct_index, o))
        .unwrap_or_default();

    let mut text = if outcome.correct {
        "Correct!".to_string()
    } else {
        format!("Incorrect. The answer was {}.", correct_option)
    };
    if !outcome.explanation.is_empty() {
        text.push(' ');
        text.push_str(&outcome.explanation);
    }
    text
}

pub fn render_progress(snapshot: &ProgressSnapshot) -> String {
    let mut lines = vec![
        "Progress".to_string(),
        format!("  Average score: {}%", snapshot.average_score),
        format!("  Quiz accuracy: {}%", snapshot.quiz_accuracy),
        format!("  Quizzes taken: {}", snapshot.quizzes_taken),
        format!("  Study time: {} ticks", snapshot.total_study_time),
        format!("  Streak: {} day(s)", snapshot.streak),
    ];
    for subject in &snapshot.subjects {
        lines.push(format!(
            "  {}: {}/{} completed, last score {}%",
            subject.subject, subject.completed, subject.target, subject.score
        ));
    }
    lines.join("\n")
}
