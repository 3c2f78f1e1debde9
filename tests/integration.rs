//! Integration tests for the extraction pipeline with real export files.

use std::fs;
use std::path::Path;

use tempfile::tempdir;
use tgpack::core::from_json;
use tgpack::dom::ClassSelector;
use tgpack::prelude::*;

/// A page as written by Telegram Desktop, trimmed to what matters.
const EXPORT_PAGE: &str = r##"<!DOCTYPE html>
<html>
 <head>
  <meta charset="utf-8"/>
  <title>Exported Data</title>
  <link href="css/style.css" rel="stylesheet"/>
 </head>
 <body>
  <div class="page_wrap">
   <div class="page_header">
    <div class="content">
     <div class="text bold">Weekend plans</div>
    </div>
   </div>
   <div class="page_body chat_page">
    <div class="history">
     <div class="message service" id="message-1">
      <div class="body details">15 March 2021</div>
     </div>
     <div class="message service" id="message100">
      <div class="body details">Alice invited Bob</div>
     </div>
     <div class="message default clearfix" id="message101">
      <div class="pull_left userpic_wrap">
       <div class="userpic userpic1" style="width: 42px; height: 42px">
        <div class="initials" style="line-height: 42px">A</div>
       </div>
      </div>
      <div class="body">
       <div class="pull_right date details" title="15.03.2021 18:02:11">18:02</div>
       <div class="from_name">
Alice
       </div>
       <div class="text">
Anyone up for hiking on <strong>Saturday</strong>?
       </div>
      </div>
     </div>
     <div class="message default clearfix joined" id="message102">
      <div class="body">
       <div class="pull_right date details" title="15.03.2021 18:02:40">18:02</div>
       <div class="text">
Weather looks good &amp; sunny
       </div>
      </div>
     </div>
     <div class="message default clearfix joined" id="message103">
      <div class="body">
       <div class="pull_right date details" title="15.03.2021 18:03:00">18:03</div>
       <div class="media_wrap clearfix">
        <a class="photo_wrap clearfix pull_left" href="photos/photo_1.jpg">
         <img class="photo" src="photos/photo_1_thumb.jpg"/>
        </a>
       </div>
      </div>
     </div>
     <div class="message default clearfix" id="message104">
      <div class="pull_left userpic_wrap">
       <div class="userpic userpic2"><div class="initials">B</div></div>
      </div>
      <div class="body">
       <div class="pull_right date details" title="15.03.2021 18:10:05">18:10</div>
       <div class="from_name">
Bob
       </div>
       <div class="reply_to details">
In reply to <a href="#go_to_message101">this message</a>
       </div>
       <div class="text">
Count me in
       </div>
      </div>
     </div>
    </div>
   </div>
  </div>
 </body>
</html>
"##;

const NEXT_PAGE: &str = r#"<html><body><div class="history">
     <div class="message default clearfix joined" id="message105">
      <div class="body">
       <div class="pull_right date details" title="15.03.2021 18:10:30">18:10</div>
       <div class="text">Continuation on a new page</div>
      </div>
     </div>
     <div class="message default clearfix" id="message106">
      <div class="body">
       <div class="pull_right date details" title="15.03.2021 17:00:00">17:00</div>
       <div class="from_name">Carol</div>
       <div class="text">Earlier message exported later</div>
      </div>
     </div>
</div></body></html>"#;

#[test]
fn parses_exported_page() {
    let messages = TelegramHtmlParser::new().parse_str(EXPORT_PAGE).unwrap();

    let lines: Vec<String> = messages.iter().map(Message::to_log_line).collect();
    assert_eq!(
        lines,
        [
            "[2021-03-15T18:02:11] Alice: Anyone up for hiking on Saturday?",
            "[2021-03-15T18:02:40] Alice: Weather looks good & sunny",
            "[2021-03-15T18:10:05] Bob: Count me in",
        ]
    );
}

#[test]
fn parses_file_from_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("messages.html");
    fs::write(&path, EXPORT_PAGE).unwrap();

    let messages = TelegramHtmlParser::new().parse(&path).unwrap();
    assert_eq!(messages.len(), 3);
}

#[test]
fn missing_file_reports_path() {
    let err = TelegramHtmlParser::new()
        .parse_file("/nonexistent/messages.html")
        .unwrap_err();
    assert!(err.is_io());
    assert!(err.to_string().contains("/nonexistent/messages.html"));
}

#[test]
fn pages_do_not_share_sender_state() {
    let (messages, stats) = process_documents(
        &TelegramHtmlParser::new(),
        [
            (Path::new("messages.html"), EXPORT_PAGE),
            (Path::new("messages2.html"), NEXT_PAGE),
        ],
        |_| {},
    )
    .unwrap();

    assert_eq!(stats.documents, 2);
    assert_eq!(stats.messages, 5);

    // Carol's message is the earliest overall
    assert_eq!(messages[0].sender(), "Carol");

    // The joined node opening page 2 starts with no known sender
    let continuation = messages
        .iter()
        .find(|m| m.body() == "Continuation on a new page")
        .unwrap();
    assert_eq!(continuation.sender(), "");
}

#[test]
fn renames_across_pages() {
    let config = TelegramHtmlConfig::new().with_renames(
        RenameTable::new()
            .with_rename("Alice", "A.")
            .with_rename("Alice", "ignored duplicate")
            .with_rename("Bob", "B."),
    );
    let parser = TelegramHtmlParser::with_config(config);
    let messages = process_strs(&parser, [EXPORT_PAGE]).unwrap();

    let plain = to_format_string(&messages, OutputFormat::Plain).unwrap();
    assert_eq!(
        plain,
        "A.: Anyone up for hiking on Saturday?\nA.: Weather looks good & sunny\nB.: Count me in\n"
    );
}

#[test]
fn structured_output_round_trips() {
    let messages = process_strs(&TelegramHtmlParser::new(), [EXPORT_PAGE, NEXT_PAGE]).unwrap();
    let json = to_format_string(&messages, OutputFormat::Structured).unwrap();
    let records = from_json(&json).unwrap();

    assert_eq!(records.len(), messages.len());
    for (record, msg) in records.iter().zip(&messages) {
        assert_eq!(record, &msg.to_structured());
    }
}

#[test]
fn custom_selectors() {
    let html = r#"
        <article class="msg">
          <time class="stamp" data-ts="2022-05-01 12:00:00"></time>
          <span class="who">Zed</span>
          <p class="body-text">custom markup</p>
        </article>"#;

    let config = TelegramHtmlConfig::new()
        .with_message_selector(".msg".parse::<ClassSelector>().unwrap())
        .with_date_selector(ClassSelector::new(["stamp"]))
        .with_sender_selector(ClassSelector::new(["who"]))
        .with_text_selector(ClassSelector::new(["body-text"]))
        .with_timestamp("data-ts", "%Y-%m-%d %H:%M:%S");

    let messages = TelegramHtmlParser::with_config(config).parse_str(html).unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].to_plain_line(), "Zed: custom markup");
}

#[test]
fn appends_rendered_output() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("chat.txt");
    let messages = process_strs(&TelegramHtmlParser::new(), [EXPORT_PAGE]).unwrap();

    append_to_format(&messages, &out, OutputFormat::BodyOnly).unwrap();
    append_to_format(&messages[..1], &out, OutputFormat::BodyOnly).unwrap();

    let content = fs::read_to_string(&out).unwrap();
    assert_eq!(content.lines().count(), 4);
    assert!(content.ends_with("Anyone up for hiking on Saturday?\n"));
}

#[test]
fn corpus_from_parser_output() {
    let parser = TelegramHtmlParser::new();
    let mut corpus = Corpus::new();
    corpus.add(parser.parse_str(NEXT_PAGE).unwrap());
    corpus.add(parser.parse_str(EXPORT_PAGE).unwrap());

    let timestamps: Vec<_> = corpus.finalize().iter().map(Message::timestamp).collect();
    let mut expected = timestamps.clone();
    expected.sort();
    assert_eq!(timestamps, expected);
}
