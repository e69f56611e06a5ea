//! Static lookup tables for SDO command specifiers and emergency error codes.
//!
//! Both lookups are pure: a miss returns `None`, a label is never
//! synthesized for an unknown code.

/// Human-readable label for a 2-hex-digit SDO command specifier byte.
///
/// Segmented download and upload continuations share one label set;
/// telling them apart would require tracking the transfer direction across
/// frames, which is out of scope here.
pub fn sdo_command_label(command_specifier: &str) -> Option<&'static str> {
    let label = match command_specifier {
        // Expedited transfers
        "40" => "读取",
        "4F" => "读响应一个字节",
        "4B" => "读响应两个字节",
        "47" => "读响应三个字节",
        "43" => "读响应四个字节",
        "2F" => "写一个字节",
        "2B" => "写两个字节",
        "27" => "写三个字节",
        "23" => "写四个字节",
        "60" => "写成功应答",
        "80" => "异常响应",
        // Segment continuation, previous segment CS = 10h
        "0F" => "本段写一个字节(前CS=10h)",
        "0D" => "本段写两个字节(前CS=10h)",
        "0B" => "本段写三个字节(前CS=10h)",
        "09" => "本段写四个字节(前CS=10h)",
        "07" => "本段写五个字节(前CS=10h)",
        "05" => "本段写六个字节(前CS=10h)",
        "03" => "本段写七个字节(前CS=10h)",
        // Segment continuation, previous segment CS = 00h
        "1F" => "本段写一个字节(前CS=00h)",
        "1D" => "本段写两个字节(前CS=00h)",
        "1B" => "本段写三个字节(前CS=00h)",
        "19" => "本段写四个字节(前CS=00h)",
        "17" => "本段写五个字节(前CS=00h)",
        "15" => "本段写六个字节(前CS=00h)",
        "13" => "本段写七个字节(前CS=00h)",
        _ => return None,
    };
    Some(label)
}

/// Human-readable label for a 4-hex-digit emergency error code.
pub fn emergency_label(error_code: &str) -> Option<&'static str> {
    let label = match error_code {
        "2211" => "软件过流",
        "2212" => "硬件过流",
        "3130" => "缺相",
        "3150" => "电流检测回路错误",
        "3151" => "电流检测回路错误",
        "3152" => "模拟量输入回路错误",
        "3153" => "缺相",
        "3154" => "模拟量输入回路错误",
        "3160" => "模拟量1输入过大",
        "3161" => "模拟量2输入过大",
        "3162" => "模拟量3输入过大",
        "3201" => "直流母线基准电压错误",
        "3205" => "控制电压过低",
        "3206" => "控制电压过高",
        "3211" => "直流母线电压过高",
        "3221" => "直流母线电压过低",
        "3222" => "主电源断线",
        "4201" => "温度基准采样错误",
        "4210" => "驱动器温度过高",
        "5201" => "不支持操作模式下驱动器使能",
        "5202" => "同步模式下不支持该操作模式启动",
        "5441" => "IO台停",
        "5510" => "RAM不足",
        "5511" => "RAM越界",
        "5530" => "保存参数错误",
        "5531" => "EEPROM硬件错误",
        "5532" => "保存历史报警错误",
        "5533" => "保存厂商参数错误",
        "5534" => "保存通讯参数错误",
        "5535" => "保存402参数错误",
        "5536" => "保存断电数据错误",
        "5550" => "ESC EEPROM无法访问",
        "5551" => "ESI文件保存错误",
        "5552" => "链路建立失败",
        "FF01" => "单位时间ECAT帧丢失过多",
        "6201" => "保存的ESI文件与驱动器组件不匹配",
        "6202" => "FOE升级固件失败",
        "6203" => "固件无效/失效",
        "6321" => "输入IO参数重复",
        "6322" => "输入IO参数超过范围",
        "6323" => "输出IO参数超过范围",
        "6329" => "FPGA写参数错误",
        "7122" => "电机型号错误",
        "7321" => "编码器断线",
        "7322" => "编码器通讯错误",
        "7323" => "编码器初始化位置错误",
        "7324" => "编码器数据错误",
        "7325" => "编码器数据加载错误",
        "7326" => "编码器数据加载错误",
        "7327" => "编码器数据加载错误",
        "7328" => "编码器数据加载错误",
        "7329" => "限位报警,限位功能选择为报警时有效",
        "7701" => "泄放过载",
        "7702" => "泄放电阻故障",
        "8110" => "CAN超载报警",
        "8120" => "被动错误",
        "8130" => "心跳/节点保护超时",
        "8140" => "掉线恢复",
        "8141" => "掉线",
        "8150" => "ID重复",
        "8201" => "通讯未知错误",
        "8207" => "PDO映射的对象不存在",
        "8208" => "PDO映射的对象长度错误",
        "8210" => "由于长度错误PDO未处理/处理超时",
        "8211" => "由于长度错误TPDO未处理/处理超时",
        "8212" => "由于长度错误RPDO未处理/处理超时",
        "8213" => "BOOT不支持",
        "8215" => "BOOT模式配置无效",
        "8216" => "Preop无效配置",
        "8217" => "无效SM配置",
        "821B" => "SM看门狗超时",
        "821C" => "无效SM类型",
        "821D" => "无效输出配置",
        "821E" => "无效输入配置",
        "821F" => "无效看门狗配置",
        "8220" => "PDO长度越界",
        "8224" => "TFF00映射无效",
        "8225" => "RFF00映射无效",
        "8226" => "配置不一致",
        "8310" => "过载",
        "8311" => "过载",
        "8301" => "电机堵转",
        "8305" => "转矩越界",
        "8401" => "振动过大报警",
        "8402" => "超速",
        "8403" => "速度失控",
        "8503" => "电子齿轮比错误",
        "8611" => "位置环超差",
        "8610" => "位置跟踪错误",
        "8612" => "位置增量过大",
        "871A" => "同步丢失错误",
        "8727" => "不支持自由运行模式",
        "8728" => "不支持同步模式",
        "872C" => "致命同步错误",
        "872D" => "无同步错误",
        "872E" => "同步周期过小",
        "8730" => "无效的DC配置",
        "8732" => "DC PLL错误",
        "8733" => "DC同步IO错误",
        "8734" => "DC同步超时",
        "8735" => "DC周期无效",
        "8736" => "sync0周期无效",
        "8737" => "sync1周期无效",
        "873A" => "SW2丢失过多",
        "873B" => "Sync0丢失过多",
        "873C" => "DC误差过大",
        "8313" => "STO故障",
        _ => return None,
    };
    Some(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expedited_specifiers_are_labeled() {
        assert_eq!(sdo_command_label("2F"), Some("写一个字节"));
        assert_eq!(sdo_command_label("43"), Some("读响应四个字节"));
        assert_eq!(sdo_command_label("80"), Some("异常响应"));
    }

    #[test]
    fn segment_specifiers_are_labeled() {
        assert_eq!(sdo_command_label("0F"), Some("本段写一个字节(前CS=10h)"));
        assert_eq!(sdo_command_label("13"), Some("本段写七个字节(前CS=00h)"));
    }

    #[test]
    fn unknown_specifier_has_no_label() {
        assert_eq!(sdo_command_label("FF"), None);
        assert_eq!(sdo_command_label(""), None);
    }

    #[test]
    fn known_emergency_codes_are_labeled() {
        assert_eq!(emergency_label("8110"), Some("CAN超载报警"));
        assert_eq!(emergency_label("2211"), Some("软件过流"));
    }

    #[test]
    fn unknown_emergency_code_has_no_label() {
        assert_eq!(emergency_label("0000"), None);
        assert_eq!(emergency_label("ABCD"), None);
    }
}
