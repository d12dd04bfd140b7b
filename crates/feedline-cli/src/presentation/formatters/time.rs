use chrono::{DateTime, Datelike, FixedOffset, SecondsFormat, Timelike, Utc};
use feedline_types::Locale;

const MINUTES_IN_DAY: i64 = 1440;
const MINUTES_IN_ALMOST_TWO_DAYS: i64 = 2520;
const MINUTES_IN_MONTH: i64 = 43200;
const MINUTES_IN_TWO_MONTHS: i64 = 86400;
// average Gregorian month, used only to split whole years
const MINUTES_IN_AVG_MONTH: f64 = 43_829.1;

/// Distance buckets, same cut points as date-fns `formatDistance`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Distance {
    LessThanAMinute,
    Minutes(i64),
    AboutHours(i64),
    Days(i64),
    AboutMonths(i64),
    Months(i64),
    AboutYears(i64),
    OverYears(i64),
    AlmostYears(i64),
}

fn distance(minutes: i64) -> Distance {
    if minutes < 2 {
        if minutes == 0 {
            Distance::LessThanAMinute
        } else {
            Distance::Minutes(1)
        }
    } else if minutes < 45 {
        Distance::Minutes(minutes)
    } else if minutes < 90 {
        Distance::AboutHours(1)
    } else if minutes < MINUTES_IN_DAY {
        Distance::AboutHours(rounded_div(minutes, 60))
    } else if minutes < MINUTES_IN_ALMOST_TWO_DAYS {
        Distance::Days(1)
    } else if minutes < MINUTES_IN_MONTH {
        Distance::Days(rounded_div(minutes, MINUTES_IN_DAY))
    } else if minutes < MINUTES_IN_TWO_MONTHS {
        Distance::AboutMonths(rounded_div(minutes, MINUTES_IN_MONTH))
    } else {
        let months = (minutes as f64 / MINUTES_IN_AVG_MONTH).floor() as i64;
        if months < 12 {
            Distance::Months(rounded_div(minutes, MINUTES_IN_MONTH))
        } else {
            let years = months / 12;
            match months % 12 {
                0..=2 => Distance::AboutYears(years),
                3..=8 => Distance::OverYears(years),
                _ => Distance::AlmostYears(years + 1),
            }
        }
    }
}

fn rounded_div(value: i64, unit: i64) -> i64 {
    (value as f64 / unit as f64).round() as i64
}

fn plural(n: i64, one: &str, many: &str) -> String {
    if n == 1 {
        one.to_string()
    } else {
        many.replace("{}", &n.to_string())
    }
}

fn phrase(distance: Distance, locale: Locale) -> String {
    match locale {
        Locale::En => match distance {
            Distance::LessThanAMinute => "less than a minute".to_string(),
            Distance::Minutes(n) => plural(n, "1 minute", "{} minutes"),
            Distance::AboutHours(n) => plural(n, "about 1 hour", "about {} hours"),
            Distance::Days(n) => plural(n, "1 day", "{} days"),
            Distance::AboutMonths(n) => plural(n, "about 1 month", "about {} months"),
            Distance::Months(n) => plural(n, "1 month", "{} months"),
            Distance::AboutYears(n) => plural(n, "about 1 year", "about {} years"),
            Distance::OverYears(n) => plural(n, "over 1 year", "over {} years"),
            Distance::AlmostYears(n) => plural(n, "almost 1 year", "almost {} years"),
        },
        Locale::PtBr => match distance {
            Distance::LessThanAMinute => "menos de um minuto".to_string(),
            Distance::Minutes(n) => plural(n, "1 minuto", "{} minutos"),
            Distance::AboutHours(n) => plural(n, "cerca de 1 hora", "cerca de {} horas"),
            Distance::Days(n) => plural(n, "1 dia", "{} dias"),
            Distance::AboutMonths(n) => plural(n, "cerca de 1 mês", "cerca de {} meses"),
            Distance::Months(n) => plural(n, "1 mês", "{} meses"),
            Distance::AboutYears(n) => plural(n, "cerca de 1 ano", "cerca de {} anos"),
            Distance::OverYears(n) => plural(n, "mais de 1 ano", "mais de {} anos"),
            Distance::AlmostYears(n) => plural(n, "quase 1 ano", "quase {} anos"),
        },
    }
}

/// Relative phrase with suffix: "há cerca de 1 hora", "about 1 hour ago", "in 2 days"
pub fn format_distance_to_now(instant: DateTime<Utc>, now: DateTime<Utc>, locale: Locale) -> String {
    let seconds = now.signed_duration_since(instant).num_seconds();
    let future = seconds < 0;
    let minutes = rounded_div(seconds.abs(), 60);
    let text = phrase(distance(minutes), locale);

    match (locale, future) {
        (Locale::En, false) => format!("{} ago", text),
        (Locale::En, true) => format!("in {}", text),
        (Locale::PtBr, false) => format!("há {}", text),
        (Locale::PtBr, true) => format!("em {}", text),
    }
}

const MONTHS_EN: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

const MONTHS_PT_BR: [&str; 12] = [
    "janeiro", "fevereiro", "março", "abril", "maio", "junho", "julho", "agosto", "setembro",
    "outubro", "novembro", "dezembro",
];

/// Exact wall-clock label: "27 de junho às 21:30h" / "June 27 at 21:30"
pub fn format_exact(instant: DateTime<Utc>, offset: FixedOffset, locale: Locale) -> String {
    let local = instant.with_timezone(&offset);
    let month = local.month0() as usize;

    match locale {
        Locale::PtBr => format!(
            "{} de {} às {:02}:{:02}h",
            local.day(),
            MONTHS_PT_BR[month],
            local.hour(),
            local.minute()
        ),
        Locale::En => format!(
            "{} {} at {:02}:{:02}",
            MONTHS_EN[month],
            local.day(),
            local.hour(),
            local.minute()
        ),
    }
}

/// Machine-readable form, as `Date.toISOString` prints it
pub fn format_machine(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}
