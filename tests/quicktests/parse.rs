use trinary::parse::{parse_i64, ParseError};

quickcheck::quickcheck! {
    fn decimal_matches_std(x: i64) -> bool {
        parse_i64(&x.to_string()) == Ok(x)
    }
}

quickcheck::quickcheck! {
    fn hexadecimal_round_trips(x: i64) -> bool {
        let sign = if x < 0 { "-" } else { "" };
        let lower = format!("{}0x{:x}", sign, x.unsigned_abs());
        let upper = format!("{}0X{:X}", sign, x.unsigned_abs());

        parse_i64(&lower) == Ok(x) && parse_i64(&upper) == Ok(x)
    }
}

quickcheck::quickcheck! {
    fn octal_round_trips(x: i64) -> bool {
        let sign = if x < 0 { "-" } else { "" };
        parse_i64(&format!("{}0{:o}", sign, x.unsigned_abs())) == Ok(x)
    }
}

quickcheck::quickcheck! {
    fn surrounding_whitespace_is_ignored(x: i64, left: u8, right: u8) -> bool {
        let padded = format!(
            "{}{}{}",
            " ".repeat(usize::from(left % 4)),
            x,
            "\t".repeat(usize::from(right % 4))
        );
        parse_i64(&padded) == Ok(x)
    }
}

quickcheck::quickcheck! {
    fn out_of_range_overflows(x: i128) -> bool {
        // Push the value outside i64 in whichever direction it leans.
        let wide = if x < 0 {
            x.min(i128::from(i64::MIN) - 1)
        } else {
            x.max(i128::from(i64::MAX) + 1)
        };

        parse_i64(&wide.to_string()) == Err(ParseError::Overflow)
    }
}
