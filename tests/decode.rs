use xsp::{decode_status, Field, PlayerRecord, XspErr};

const PREAMBLE: &[u8] = b"\xFF\xFF\xFF\xFFstatusResponse\n";

fn datagram(body: &str) -> Vec<u8> {
    [PREAMBLE, body.as_bytes()].concat()
}

fn player(score: &str, ping: &str, team: Option<&str>, nick: &str) -> PlayerRecord {
    PlayerRecord {
        score: score.into(),
        ping: ping.into(),
        team: team.map(String::from),
        nick: nick.into(),
    }
}

#[test]
fn decodes_stormkeep_sample() -> Result<(), XspErr> {
    let body = "\\gamename\\Xonotic\\modname\\data\\mapname\\stormkeep\\sv_maxclients\\16\\clients\\1\\d0_blind_id\\X\n0 5 \"^1Red\"\n";
    let status = decode_status(&datagram(body), true)?;

    assert_eq!(status.get(Field::GameName), Some("Xonotic"));
    assert_eq!(status.get(Field::ModName), Some("data"));
    assert_eq!(status.get(Field::MapName), Some("stormkeep"));
    assert_eq!(status.get(Field::MaxClients), Some("16"));
    assert_eq!(status.get(Field::Clients), Some("1"));
    assert_eq!(status.get(Field::BlindId), Some("X"));
    assert_eq!(status.players(), Some(&[player("0", "5", None, "Red")][..]));
    assert_eq!(status.len(), 7);

    Ok(())
}

#[test]
fn preamble_is_optional() -> Result<(), XspErr> {
    let body = "\\gamename\\Xonotic\\d0_blind_id\\X\n";

    assert_eq!(
        decode_status(body.as_bytes(), true)?,
        decode_status(&datagram(body), true)?
    );

    Ok(())
}

#[test]
fn full_server_response() -> Result<(), XspErr> {
    let body = concat!(
        "\\gamename\\Xonotic\\modname\\data\\gameversion\\805\\sv_maxclients\\24",
        "\\clients\\3\\bots\\1\\mapname\\afterslime\\hostname\\^xF80Fun ^7CTF",
        "\\protocol\\3\\qcstatus\\ctf:0.8.6:P0:S21:F5:MXonotic::score!!:1",
        "\\d0_blind_id\\1 0RmQ/cx7VUJ8j0Gl+V3ZnTdq2u7Tc/YBRNfbj4qHOs=@Xon//Ks\n",
        "-666 0 0 \"^2spec^7\"\n",
        "12 43 5 \"^x0F0Green\"\n",
        "7 0 14 \"[BOT]^1Grunt\"\n",
    );
    let status = decode_status(&datagram(body), true)?;

    assert_eq!(status.get(Field::GameMode), Some("ctf"));
    assert_eq!(
        status.get(Field::QcStatus),
        Some("ctf:0.8.6:P0:S21:F5:MXonotic::score!!:1")
    );
    // Only nicks are filtered, the host name keeps its codes.
    assert_eq!(status.get(Field::HostName), Some("^xF80Fun ^7CTF"));
    assert_eq!(
        status.get(Field::BlindId),
        Some("1 0RmQ/cx7VUJ8j0Gl+V3ZnTdq2u7Tc/YBRNfbj4qHOs=@Xon//Ks")
    );
    assert_eq!(
        status.players(),
        Some(
            &[
                player("-666", "0", Some("0"), "spec"),
                player("12", "43", Some("5"), "Green"),
                player("7", "0", Some("14"), "[BOT]Grunt"),
            ][..]
        )
    );

    Ok(())
}

#[test]
fn compound_field_feeds_game_mode() -> Result<(), XspErr> {
    let status = decode_status(b"\\qcstatus\\dm:10", true)?;

    assert_eq!(status.get(Field::GameMode), Some("dm"));
    assert_eq!(status.get(Field::QcStatus), Some("dm:10"));

    Ok(())
}

#[test]
fn empty_server_has_empty_player_list() -> Result<(), XspErr> {
    let status = decode_status(&datagram("\\clients\\0\\d0_blind_id\\X\n"), true)?;

    assert_eq!(status.players(), Some(&[][..]));

    Ok(())
}

#[test]
fn blank_player_line_fails_decode() {
    let result = decode_status(&datagram("\\gamename\\X\\d0_blind_id\\X\n\n"), true);

    assert!(matches!(
        result,
        Err(XspErr::MalformedPlayer { line_no: 1, .. })
    ));
}

#[test]
fn truncated_identity_fails_decode() {
    let result = decode_status(b"\\gamename\\X\\d0_blind_id\\X", true);

    assert!(matches!(result, Err(XspErr::MalformedPlayer { .. })));
}

#[test]
fn response_without_identity_has_no_player_list() -> Result<(), XspErr> {
    let status = decode_status(&datagram("\\gamename\\X\\"), true)?;

    assert_eq!(status.players(), None);
    assert_eq!(status.len(), 1);

    Ok(())
}

#[test]
fn unknown_field_is_ignored() -> Result<(), XspErr> {
    let status = decode_status(b"\\unknownfield\\value\\gamename\\X\\", true)?;

    assert_eq!(status.fields().collect::<Vec<_>>(), vec![(Field::GameName, "X")]);

    Ok(())
}

#[test]
fn repeated_field_keeps_last_value() -> Result<(), XspErr> {
    let status = decode_status(b"\\mapname\\one\\mapname\\two", true)?;

    assert_eq!(status.get(Field::MapName), Some("two"));

    Ok(())
}

#[test]
fn color_filter_flag() -> Result<(), XspErr> {
    let body = datagram("\\d0_blind_id\\X\n0 5 \"Pla^1yer^x123Two\"\n");

    assert_eq!(
        decode_status(&body, true)?.players().unwrap()[0].nick,
        "PlayerTwo"
    );
    assert_eq!(
        decode_status(&body, false)?.players().unwrap()[0].nick,
        "Pla^1yer^x123Two"
    );

    Ok(())
}

#[test]
fn invalid_utf8_is_replaced() -> Result<(), XspErr> {
    let body = [
        PREAMBLE,
        &b"\\hostname\\caf\xE9\\d0_blind_id\\X\n1 2 \"\xFFnick\"\n"[..],
    ]
    .concat();
    let status = decode_status(&body, true)?;

    assert_eq!(status.get(Field::HostName), Some("caf\u{FFFD}"));
    assert_eq!(status.players().unwrap()[0].nick, "\u{FFFD}nick");

    Ok(())
}

#[test]
fn malformed_player_line_fails_decode() {
    let body = datagram("\\gamename\\Xonotic\\d0_blind_id\\X\n0 5 \"ok\"\nbroken line\n");

    match decode_status(&body, true) {
        Err(XspErr::MalformedPlayer { line_no, line, .. }) => {
            assert_eq!(line_no, 2);
            assert_eq!(line, "broken line");
        }
        other => panic!("expected a malformed player error, got {:?}", other),
    }
}

#[test]
fn renders_as_json() -> Result<(), XspErr> {
    let status = decode_status(&datagram("\\mapname\\dance\\d0_blind_id\\X\n3 9 \"a\"\n"), true)?;
    let json: serde_json::Value = serde_json::from_str(&status.to_string()).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "mapname": "dance",
            "d0_blind_id": "X",
            "players": [{ "score": "3", "ping": "9", "team": null, "nick": "a" }],
        })
    );

    Ok(())
}
