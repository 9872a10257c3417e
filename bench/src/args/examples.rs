pub const EXAMPLES: &str = r#"EXAMPLES:

1) Burst of concurrent connections against a local server:

    100 connections launched together, each sending 10 commands
    (HELP, TIME, STATUS, ECHO ...) with 100 ms between commands:

    $ cargo r --bin chat-bench -r --

2) Larger burst without delay, results saved to a JSON file:

    $ cargo r --bin chat-bench -r -- --connections 500 --messages 20 --delay 0 --output results/burst.json

3) Sustained load:

    Batches of 25 single-command connections, repeated for two minutes:

    $ cargo r --bin chat-bench -r -- --test-type sustained --duration 120 --rate 25

4) Remote server:

    $ cargo r --bin chat-bench -r -- --host 192.168.1.20 --port 8081 --timeout 10

5) Inspecting raw responses of a single connection:

    $ cargo r --bin chat-probe -- --scenario help
    $ cargo r --bin chat-probe -- --command "/join lobby" --command "/help"
"#;
