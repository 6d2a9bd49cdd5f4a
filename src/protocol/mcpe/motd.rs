use crate::error::FormatError;

/// The tag every MCPE status record starts with.
pub const MCPE_TAG: &str = "MCPE";

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gamemode {
    Survival = 0,
    Creative,
    Adventure,
    Spectator,
}

impl Gamemode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gamemode::Survival => "Survival",
            Gamemode::Creative => "Creative",
            Gamemode::Adventure => "Adventure",
            Gamemode::Spectator => "Spectator",
        }
    }

    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(Gamemode::Survival),
            1 => Some(Gamemode::Creative),
            2 => Some(Gamemode::Adventure),
            3 => Some(Gamemode::Spectator),
            _ => None,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        [
            Gamemode::Survival,
            Gamemode::Creative,
            Gamemode::Adventure,
            Gamemode::Spectator,
        ]
        .into_iter()
        .find(|mode| mode.as_str().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for Gamemode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", *self as u8)
    }
}

/// Protocol wise, the motd is just a string.
/// However we're using this struct to represent the status record carried by the pong:
///
/// `MCPE;<motd>;<protocol>;<version>;<online>;<max>[;<guid>;<level>;<mode>;<mode id>;<port>;<port v6>...]`
///
/// The first six fields are mandatory. Servers usually send the trailing ones too,
/// but they are read leniently: a missing or garbled trailing field is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Motd {
    /// The message of the day, usually the server name.
    pub name: String,
    /// The network protocol version.
    pub protocol: i32,
    /// The game version of the server.
    pub version: String,
    /// The number of players online.
    pub player_count: i32,
    /// The maximum number of players.
    pub player_max: i32,
    /// The server's GUID as advertised in the record.
    pub server_guid: Option<u64>,
    /// The second motd line, which vanilla servers fill with the level name.
    pub level_name: Option<String>,
    /// The default gamemode of the server.
    pub gamemode: Option<Gamemode>,
    /// The IPv4 port.
    pub port: Option<u16>,
    /// The IPv6 port.
    pub ipv6_port: Option<u16>,
}

impl Motd {
    pub fn new<S: Into<String>>(name: S, protocol: i32, version: S) -> Self {
        Self {
            name: name.into(),
            protocol,
            version: version.into(),
            player_count: 0,
            player_max: 0,
            server_guid: None,
            level_name: None,
            gamemode: None,
            port: None,
            ipv6_port: None,
        }
    }

    /// Decodes a status record.
    ///
    /// Numeric fields are decoded in record order (protocol, online, max) and the
    /// first one that is not a 32 bit signed integer fails the whole record.
    pub fn decode(record: &str) -> Result<Self, FormatError> {
        let parts = record.split(';').collect::<Vec<&str>>();

        if parts.len() < 6 {
            return Err(FormatError::TooFewFields);
        }

        if parts[0] != MCPE_TAG {
            return Err(FormatError::WrongTag);
        }

        let numeric = [
            parse_i32(parts[2], FormatError::ProtocolVersion),
            parse_i32(parts[4], FormatError::OnlineCount),
            parse_i32(parts[5], FormatError::MaxCount),
        ];
        let [protocol, player_count, player_max] = numeric;

        let optional = |i: usize| parts.get(i).copied().filter(|v| !v.is_empty());

        Ok(Motd {
            name: parts[1].to_string(),
            protocol: protocol?,
            version: parts[3].to_string(),
            player_count: player_count?,
            player_max: player_max?,
            server_guid: optional(6).and_then(|v| v.parse::<u64>().ok()),
            level_name: optional(7).map(|v| v.to_string()),
            gamemode: optional(9)
                .and_then(|v| v.parse::<u8>().ok())
                .and_then(Gamemode::from_id)
                .or_else(|| optional(8).and_then(Gamemode::from_name)),
            port: optional(10).and_then(|v| v.parse::<u16>().ok()),
            ipv6_port: optional(11).and_then(|v| v.parse::<u16>().ok()),
        })
    }

    /// Takes the Motd and writes it into a valid MCPE status record.
    /// Trailing fields are only written up to the last one that is set.
    pub fn encode(&self) -> String {
        let mut props: Vec<String> = vec![
            MCPE_TAG.into(),
            self.name.clone(),
            self.protocol.to_string(),
            self.version.clone(),
            self.player_count.to_string(),
            self.player_max.to_string(),
        ];

        let trailing: [Option<String>; 6] = [
            self.server_guid.map(|v| v.to_string()),
            self.level_name.clone(),
            self.gamemode.map(|v| v.as_str().to_string()),
            self.gamemode.map(|v| v.to_string()),
            self.port.map(|v| v.to_string()),
            self.ipv6_port.map(|v| v.to_string()),
        ];

        if let Some(last) = trailing.iter().rposition(Option::is_some) {
            props.extend(
                trailing[..=last]
                    .iter()
                    .map(|v| v.clone().unwrap_or_default()),
            );
        }

        props.join(";")
    }
}

fn parse_i32(field: &str, err: FormatError) -> Result<i32, FormatError> {
    field.parse::<i32>().map_err(|_| err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_mandatory_fields() {
        let motd = Motd::decode("MCPE;Hello;422;1.20;5;20").unwrap();
        assert_eq!(motd.name, "Hello");
        assert_eq!(motd.protocol, 422);
        assert_eq!(motd.version, "1.20");
        assert_eq!(motd.player_count, 5);
        assert_eq!(motd.player_max, 20);
        assert_eq!(motd.server_guid, None);
        assert_eq!(motd.gamemode, None);
    }

    #[test]
    fn decodes_vanilla_trailing_fields() {
        let motd = Motd::decode(
            "MCPE;Dedicated Server;594;1.20.10;0;10;13253860892328930865;Bedrock level;Survival;1;19132;19133;",
        )
        .unwrap();
        assert_eq!(motd.server_guid, Some(13253860892328930865));
        assert_eq!(motd.level_name.as_deref(), Some("Bedrock level"));
        assert_eq!(motd.gamemode, Some(Gamemode::Creative));
        assert_eq!(motd.port, Some(19132));
        assert_eq!(motd.ipv6_port, Some(19133));
    }

    #[test]
    fn gamemode_falls_back_to_name() {
        let motd = Motd::decode("MCPE;m;1;v;0;1;;;adventure;x").unwrap();
        assert_eq!(motd.gamemode, Some(Gamemode::Adventure));
        assert_eq!(motd.level_name, None);
        assert_eq!(motd.server_guid, None);
    }

    #[test]
    fn garbled_trailing_fields_are_ignored() {
        let motd = Motd::decode("MCPE;m;1;v;0;1;guid?;lvl;Mode;9;port;-1").unwrap();
        assert_eq!(motd.server_guid, None);
        assert_eq!(motd.gamemode, None);
        assert_eq!(motd.port, None);
        assert_eq!(motd.ipv6_port, None);
    }

    #[test]
    fn rejects_wrong_tag() {
        assert_eq!(
            Motd::decode("BAD;a;1;b;2;3"),
            Err(FormatError::WrongTag)
        );
        assert_eq!(Motd::decode("mcpe;a;1;b;2;3"), Err(FormatError::WrongTag));
    }

    #[test]
    fn rejects_too_few_fields() {
        assert_eq!(Motd::decode(""), Err(FormatError::TooFewFields));
        assert_eq!(
            Motd::decode("MCPE;a;1;b;2"),
            Err(FormatError::TooFewFields)
        );
    }

    #[test]
    fn numeric_range_is_checked() {
        assert_eq!(
            Motd::decode("MCPE;x;0;v;2147483648;5"),
            Err(FormatError::OnlineCount)
        );
        assert_eq!(
            Motd::decode("MCPE;x;0;v;-2147483649;5"),
            Err(FormatError::OnlineCount)
        );
        let motd = Motd::decode("MCPE;x;0;v;2147483647;5").unwrap();
        assert_eq!(motd.player_count, i32::MAX);
        let motd = Motd::decode("MCPE;x;-1;v;0;-2147483648").unwrap();
        assert_eq!(motd.protocol, -1);
        assert_eq!(motd.player_max, i32::MIN);
    }

    #[test]
    fn first_numeric_error_wins() {
        assert_eq!(
            Motd::decode("MCPE;x;nope;v;nope;nope"),
            Err(FormatError::ProtocolVersion)
        );
        assert_eq!(
            Motd::decode("MCPE;x;1;v;2;nope"),
            Err(FormatError::MaxCount)
        );
        assert_eq!(Motd::decode("MCPE;x;1;v;;3"), Err(FormatError::OnlineCount));
    }

    #[test]
    fn encode_skips_unset_trailing_fields() {
        let mut motd = Motd::new("Netrex Server", 448, "1.18.0");
        motd.player_count = 10;
        motd.player_max = 100;
        assert_eq!(motd.encode(), "MCPE;Netrex Server;448;1.18.0;10;100");

        motd.gamemode = Some(Gamemode::Spectator);
        assert_eq!(
            motd.encode(),
            "MCPE;Netrex Server;448;1.18.0;10;100;;;Spectator;3"
        );
        assert_eq!(Motd::decode(&motd.encode()).unwrap(), motd);
    }
}
