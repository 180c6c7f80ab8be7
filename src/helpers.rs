//! Error reply builders shared by the dispatcher and error conversions.

use ircd_proto::{Reply, Response};

/// Helper to create a server reply (numeric response).
pub fn server_reply(server_name: &str, response: Response, params: Vec<String>) -> Reply {
    Reply::numeric(server_name, response, params)
}

/// Create ERR_UNKNOWNERROR reply (400) for a line over the length limit.
pub fn err_inputtoolong(server_name: &str, nick: &str, command: &str) -> Reply {
    server_reply(
        server_name,
        Response::ERR_UNKNOWNERROR,
        vec![
            nick.to_string(),
            command.to_string(),
            "Input line was too long".to_string(),
        ],
    )
}

/// Create ERR_UNKNOWNCOMMAND reply (421) - unknown command.
pub fn err_unknowncommand(server_name: &str, nick: &str, command: &str) -> Reply {
    server_reply(
        server_name,
        Response::ERR_UNKNOWNCOMMAND,
        vec![
            nick.to_string(),
            command.to_string(),
            "Unknown command".to_string(),
        ],
    )
}

/// Create ERR_NEEDMOREPARAMS reply (461) - not enough parameters.
pub fn err_needmoreparams(server_name: &str, nick: &str, command: &str) -> Reply {
    server_reply(
        server_name,
        Response::ERR_NEEDMOREPARAMS,
        vec![
            nick.to_string(),
            command.to_string(),
            "Not enough parameters".to_string(),
        ],
    )
}

/// Create ERR_UMODEUNKNOWNFLAG reply (501) - bad MODE flag.
pub fn err_umodeunknownflag(server_name: &str, nick: &str) -> Reply {
    server_reply(
        server_name,
        Response::ERR_UMODEUNKNOWNFLAG,
        vec![nick.to_string(), "Unknown MODE flag".to_string()],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_command_wire_form() {
        let reply = err_unknowncommand("irc.example.net", "*", "FROB");
        assert_eq!(
            reply.to_string(),
            ":irc.example.net 421 * FROB :Unknown command\r\n"
        );
    }
}
