use ouilookup_common::vendors::VendorLookup;
use ouilookup_core::arp::ArpTableReader;
use ouilookup_core::lookup::LookupRunner;
use ouilookup_core::vendors::MacLookupRepo;

use crate::stubs::{BASE_URL, CannedTable, StubHttp, url_for};

fn run_single(http: &StubHttp, raw_mac: &str) -> (String, VendorLookupOutcome) {
    let runner = LookupRunner::new(
        MacLookupRepo::new(http, BASE_URL),
        ArpTableReader::new(CannedTable::Text("")),
    );
    let mut out: Vec<u8> = Vec::new();
    let resolution = runner.single(raw_mac, &mut out).unwrap();
    let outcome = match resolution.outcome {
        Ok(lookup) => VendorLookupOutcome::Answered(lookup),
        Err(_) => VendorLookupOutcome::Failed,
    };
    (String::from_utf8(out).unwrap(), outcome)
}

#[derive(Debug, PartialEq)]
enum VendorLookupOutcome {
    Answered(VendorLookup),
    Failed,
}

#[test]
fn single_mac_found() {
    let http = StubHttp::new().respond("aabbccddeeff", 200, "Apple, Inc.");

    let (output, outcome) = run_single(&http, "AA:BB:CC:DD:EE:FF");
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), 3, "unexpected output: {output}");
    assert_eq!(lines[0], "MAC address   : AA:BB:CC:DD:EE:FF");
    assert_eq!(lines[1], "Vendor        : Apple, Inc.");

    let millis: &str = lines[2]
        .strip_prefix("Response time : ")
        .and_then(|rest| rest.strip_suffix("ms"))
        .expect("response time line");
    assert!(millis.parse::<u128>().is_ok(), "not whole milliseconds: {millis}");

    assert_eq!(
        outcome,
        VendorLookupOutcome::Answered(VendorLookup::Found("Apple, Inc.".to_string()))
    );
    assert_eq!(http.calls(), vec![url_for("aabbccddeeff")]);
}

#[test]
fn single_mac_not_found_body_is_normalized() {
    let http = StubHttp::new().respond("aabbccddeeff", 200, "not found");

    let (output, outcome) = run_single(&http, "aa-bb-cc-dd-ee-ff");

    assert!(output.contains("Vendor        : Not found\n"));
    assert!(!output.contains("not found"));
    assert_eq!(outcome, VendorLookupOutcome::Answered(VendorLookup::NotFound));
}

#[test]
fn single_mac_http_error_shows_not_found() {
    let http = StubHttp::new().respond("aabbccddeeff", 404, "Not Found");

    let (output, outcome) = run_single(&http, "AA:BB:CC:DD:EE:FF");

    assert!(output.contains("Vendor        : Not found\n"));
    assert_eq!(outcome, VendorLookupOutcome::Failed);
}

#[test]
fn single_mac_connection_error_shows_not_found() {
    let http = StubHttp::new();

    let (output, outcome) = run_single(&http, "AA:BB:CC:DD:EE:FF");

    assert!(output.starts_with("MAC address   : AA:BB:CC:DD:EE:FF\n"));
    assert!(output.contains("Vendor        : Not found\n"));
    assert_eq!(outcome, VendorLookupOutcome::Failed);
}

#[test]
fn single_mac_malformed_input_is_sent_as_is() {
    let http = StubHttp::new();

    run_single(&http, "Not-A:Mac");

    assert_eq!(http.calls(), vec![url_for("notamac")]);
}
