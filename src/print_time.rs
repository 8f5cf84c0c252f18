/// 출력 시간 문자열 처리 시 발생 가능한 오류.
#[derive(Debug)]
pub enum PrintTimeError {
    /// 형식이 잘못된 시간 문자열
    Malformed(String),
}

impl std::fmt::Display for PrintTimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrintTimeError::Malformed(s) => {
                write!(f, "잘못된 시간 형식: {s} (예: 4h30m, 45m, 270)")
            }
        }
    }
}

impl std::error::Error for PrintTimeError {}

/// `4h30m` 형태의 출력 시간 문자열을 분으로 해석한다.
///
/// `2h`, `45m`, 숫자만 있는 `270`(분 단위)도 허용한다. 시·분 토큰 사이
/// 공백은 무시하고, 그 밖의 형식은 `Malformed`로 돌려준다.
pub fn parse_print_time(text: &str) -> Result<f64, PrintTimeError> {
    let s = text.trim();
    if s.is_empty() {
        return Err(PrintTimeError::Malformed(text.to_string()));
    }

    // 숫자만 있으면 분으로 본다.
    if s.bytes().all(|b| b.is_ascii_digit()) {
        return match s.parse::<u32>() {
            Ok(v) => Ok(f64::from(v)),
            Err(_) => Err(PrintTimeError::Malformed(text.to_string())),
        };
    }

    let mut hours: Option<u32> = None;
    let mut minutes: Option<u32> = None;
    let mut rest = s;
    while !rest.is_empty() {
        let digits_end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        if digits_end == 0 {
            return Err(PrintTimeError::Malformed(text.to_string()));
        }
        let value: u32 = rest[..digits_end]
            .parse()
            .map_err(|_| PrintTimeError::Malformed(text.to_string()))?;
        let mut tail = rest[digits_end..].chars();
        match tail.next() {
            Some('h') | Some('H') if hours.is_none() && minutes.is_none() => hours = Some(value),
            Some('m') | Some('M') if minutes.is_none() => minutes = Some(value),
            _ => return Err(PrintTimeError::Malformed(text.to_string())),
        }
        rest = tail.as_str().trim_start();
    }
    Ok(minutes_from_parts(hours.unwrap_or(0), minutes.unwrap_or(0)))
}

/// 시/분 입력 칸 값을 분으로 합산한다.
pub fn minutes_from_parts(hours: u32, minutes: u32) -> f64 {
    f64::from(hours) * 60.0 + f64::from(minutes)
}

/// 분 값을 `4h 30m` 형태로 만든다. 표시용이며 반올림한다.
pub fn format_minutes(total_minutes: f64) -> String {
    let total = total_minutes.max(0.0).round() as u64;
    let h = total / 60;
    let m = total % 60;
    if h > 0 && m > 0 {
        format!("{h}h {m}m")
    } else if h > 0 {
        format!("{h}h")
    } else {
        format!("{m}m")
    }
}
