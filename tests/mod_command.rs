use bson::{Bson, Document, doc};
use log::{Level, LevelFilter, Log, Metadata, Record};
use nexus_model::command::{CommandExecutor, UpdateCommand, UpdateModification, search, update};
use nexus_model::options::{Collation, UpdateOptions};
use nexus_model::search::{SearchStageOptions, in_values, search_stage};
use nexus_model::DbError;
use std::cell::RefCell;
use std::sync::Mutex;

/// Records every command and answers with a canned reply.
struct RecordingExecutor {
    reply: Document,
    seen: RefCell<Vec<(String, Document)>>,
}

impl RecordingExecutor {
    fn replying(reply: Document) -> Self {
        Self { reply, seen: RefCell::new(Vec::new()) }
    }
}

impl CommandExecutor for RecordingExecutor {
    fn run_command(&self, db: &str, command: Document) -> Result<Document, DbError> {
        self.seen.borrow_mut().push((db.to_owned(), command));
        Ok(self.reply.clone())
    }
}

struct Unreachable;

impl CommandExecutor for Unreachable {
    fn run_command(&self, _db: &str, _command: Document) -> Result<Document, DbError> {
        Err(DbError::Executor("connection refused".into()))
    }
}

#[test]
fn bare_update_one_command() {
    let cmd = UpdateCommand::one("users", doc! {"_id": 1}, doc! {"$set": {"a": 1}});
    assert!(!cmd.is_multi());
    assert_eq!(
        cmd.to_document(),
        doc! {
            "update": "users",
            "updates": [{"q": {"_id": 1}, "u": {"$set": {"a": 1}}}],
            "ordered": true,
        }
    );
}

#[test]
fn every_option_lands_in_its_slot() {
    let opts = UpdateOptions::new()
        .upsert(true)
        .bypass_document_validation(false)
        .collation(Collation::builder().locale("en").build())
        .array_filters(vec![doc! {"e.x": 1}])
        .hint_string("a_1".to_string())
        .comment("audit".to_string())
        .let_vars(doc! {"lim": 5})
        .sort(doc! {"ts": -1});
    let cmd = UpdateCommand::many("events", doc! {}, vec![doc! {"$set": {"seen": true}}]).options(opts);
    assert_eq!(
        cmd.to_document(),
        doc! {
            "update": "events",
            "updates": [{
                "q": {},
                "u": [{"$set": {"seen": true}}],
                "upsert": true,
                "multi": true,
                "collation": {"locale": "en"},
                "arrayFilters": [{"e.x": 1}],
                "hint": "a_1",
                "sort": {"ts": -1},
            }],
            "ordered": true,
            "bypassDocumentValidation": false,
            "comment": "audit",
            "let": {"lim": 5},
        }
    );
}

#[test]
fn document_hint_takes_the_single_hint_slot() {
    let opts = UpdateOptions::new().hint(doc! {"a": 1}).hint_string("b_1".to_string());
    let cmd = UpdateCommand::one("c", doc! {}, doc! {"$inc": {"n": 1}}).options(opts);
    let command = cmd.to_document();
    let statement = command.get_array("updates").unwrap()[0].as_document().unwrap().clone();
    assert_eq!(statement.get_document("hint").unwrap(), &doc! {"a": 1});
    // the options themselves still carry both forms
    assert_eq!(cmd.get_options().get_hint_string(), Some("b_1"));
}

struct CaptureLog {
    lines: Mutex<Vec<String>>,
}

impl Log for CaptureLog {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(format!("{} {}", record.target(), record.args()));
        }
    }

    fn flush(&self) {}
}

static CAPTURE: CaptureLog = CaptureLog { lines: Mutex::new(Vec::new()) };

#[test]
fn unsent_hint_string_is_logged() {
    let _ = log::set_logger(&CAPTURE);
    log::set_max_level(LevelFilter::Debug);

    let opts = UpdateOptions::new().hint(doc! {"k": 1}).hint_string("k_1".to_string());
    let command = UpdateCommand::one("audit_log", doc! {}, doc! {"$set": {"a": 1}}).options(opts).to_document();
    let statement = command.get_array("updates").unwrap()[0].as_document().unwrap().clone();
    assert_eq!(statement.get_document("hint").unwrap(), &doc! {"k": 1});

    let lines = CAPTURE.lines.lock().unwrap();
    assert!(
        lines
            .iter()
            .any(|l| l.starts_with("nexus_model::command") && l.contains("audit_log") && l.contains("'k_1' not sent")),
        "no log line in {lines:?}"
    );
}

#[test]
fn pipeline_update_is_encoded_as_array() {
    let m = UpdateModification::from(vec![doc! {"$set": {"a": 1}}, doc! {"$unset": "b"}]);
    assert_eq!(
        Bson::from(m),
        Bson::Array(vec![Bson::Document(doc! {"$set": {"a": 1}}), Bson::Document(doc! {"$unset": "b"})])
    );
}

#[test]
fn update_hands_encoded_command_to_executor() {
    let exec = RecordingExecutor::replying(doc! {"ok": 1.0, "n": 3, "nModified": 2});
    let cmd = UpdateCommand::many("users", doc! {"active": false}, doc! {"$set": {"active": true}});
    let reply = update(&exec, "app", &cmd).unwrap();
    assert_eq!(reply, doc! {"ok": 1.0, "n": 3, "nModified": 2});

    let seen = exec.seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0, "app");
    assert_eq!(seen[0].1, cmd.to_document());
}

#[test]
fn server_reply_is_left_to_the_executor() {
    // rejections and write concern failures are the executor's to interpret
    for reply in [
        doc! {"ok": 0, "code": 2, "errmsg": "bad hint"},
        doc! {"ok": 1, "n": 1, "writeConcernError": {"code": 64, "errmsg": "wc timeout"}},
    ] {
        let exec = RecordingExecutor::replying(reply.clone());
        let cmd = UpdateCommand::one("c", doc! {}, doc! {"$set": {"a": 1}});
        assert_eq!(update(&exec, "app", &cmd).unwrap(), reply);
    }
}

#[test]
fn executor_failure_is_passed_through() {
    let cmd = UpdateCommand::one("c", doc! {}, doc! {"$set": {"a": 1}});
    let err = update(&Unreachable, "app", &cmd).unwrap_err();
    assert!(matches!(err, DbError::Executor(ref m) if m == "connection refused"));
}

#[test]
fn search_runs_single_stage_aggregate() {
    let exec = RecordingExecutor::replying(doc! {"ok": 1, "cursor": {"firstBatch": [], "id": 0_i64}});
    let stage = search_stage(in_values("tag", ["x"]).unwrap(), &SearchStageOptions::new());
    let reply = search(&exec, "app", "items", stage.clone()).unwrap();
    assert!(reply.contains_key("cursor"));

    let seen = exec.seen.borrow();
    assert_eq!(
        seen[0].1,
        doc! {"aggregate": "items", "pipeline": [stage], "cursor": {}}
    );
}
