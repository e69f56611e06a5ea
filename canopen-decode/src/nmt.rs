//! NMT command interpretation.

/// Label for an NMT command byte; unknown codes get a fixed sentinel.
fn command_label(command: &str) -> &'static str {
    match command {
        "01" => "切换到操作状态",
        "02" => "切换到停止状态",
        "80" => "切换到预操作状态",
        "81" => "重置节点",
        "82" => "重置通信",
        _ => "unknown command",
    }
}

/// Decode the two payload bytes of an NMT frame.
///
/// `target` is the raw two-digit token from the frame; `"00"` addresses
/// every node on the bus, any other value is rendered verbatim.
pub fn decode_nmt(command: &str, target: &str) -> String {
    let label = command_label(command);
    if target == "00" {
        format!("nmt broadcast {}", label)
    } else {
        format!("nmt node{} {}", target, label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn broadcast_pre_operational() {
        assert_eq!(decode_nmt("80", "00"), "nmt broadcast 切换到预操作状态");
    }

    #[test]
    fn targeted_start_command() {
        assert_eq!(decode_nmt("01", "05"), "nmt node05 切换到操作状态");
    }

    #[test]
    fn target_token_is_not_reparsed() {
        // "0A" stays "0A", it is not converted to decimal
        assert_eq!(decode_nmt("02", "0A"), "nmt node0A 切换到停止状态");
    }

    #[test]
    fn unknown_command_uses_the_sentinel() {
        assert_eq!(decode_nmt("7F", "00"), "nmt broadcast unknown command");
    }

    #[test]
    fn reset_commands() {
        assert_eq!(decode_nmt("81", "03"), "nmt node03 重置节点");
        assert_eq!(decode_nmt("82", "00"), "nmt broadcast 重置通信");
    }
}
