use super::types::ResultsDocument;
use anyhow::Result;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Cursor;
use std::path::Path;

/// Generate JUnit XML from a results document: one `<testsuite>` for the
/// run, one `<testcase>` per scenario outcome.
pub fn generate_junit_xml(document: &ResultsDocument) -> Result<String> {
    let results = &document.test_results;
    let mut writer = Writer::new(Cursor::new(Vec::new()));

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let failures = results.failed();
    let total_time = results.total_duration_seconds;

    let mut suites_start = BytesStart::new("testsuites");
    suites_start.push_attribute(("name", "loginprobe-run"));
    suites_start.push_attribute(("tests", results.total.to_string().as_str()));
    suites_start.push_attribute(("failures", failures.to_string().as_str()));
    suites_start.push_attribute(("time", total_time.to_string().as_str()));
    writer.write_event(Event::Start(suites_start))?;

    let mut suite_start = BytesStart::new("testsuite");
    suite_start.push_attribute(("name", "login-suite"));
    suite_start.push_attribute(("tests", results.total.to_string().as_str()));
    suite_start.push_attribute(("failures", failures.to_string().as_str()));
    suite_start.push_attribute(("time", total_time.to_string().as_str()));
    suite_start.push_attribute(("timestamp", document.timestamp.as_str()));
    writer.write_event(Event::Start(suite_start))?;

    for outcome in &results.outcomes {
        let mut case_start = BytesStart::new("testcase");
        case_start.push_attribute(("name", outcome.scenario_name.as_str()));
        case_start.push_attribute(("classname", "loginprobe"));
        case_start.push_attribute(("time", outcome.duration_seconds.to_string().as_str()));

        if let Some(ref error) = outcome.error {
            writer.write_event(Event::Start(case_start))?;

            let mut failure = BytesStart::new("failure");
            failure.push_attribute(("message", error.as_str()));
            writer.write_event(Event::Start(failure))?;
            writer.write_event(Event::Text(BytesText::new(error)))?;
            writer.write_event(Event::End(BytesEnd::new("failure")))?;

            writer.write_event(Event::End(BytesEnd::new("testcase")))?;
        } else {
            writer.write_event(Event::Empty(case_start))?;
        }
    }

    writer.write_event(Event::End(BytesEnd::new("testsuite")))?;
    writer.write_event(Event::End(BytesEnd::new("testsuites")))?;

    let xml = String::from_utf8(writer.into_inner().into_inner())?;
    Ok(xml)
}

/// Generate a JUnit report, writing to `output` or stdout.
pub fn generate(document: &ResultsDocument, output: Option<&Path>) -> Result<()> {
    let xml = generate_junit_xml(document)?;
    if let Some(path) = output {
        std::fs::write(path, xml)?;
        println!("JUnit report saved to: {}", path.display());
    } else {
        println!("{}", xml);
    }
    Ok(())
}
