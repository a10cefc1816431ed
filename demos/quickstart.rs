use chrono::Utc;
use taqvim::{JalaliDate, JalaliDateTime, ToJalali, UtcOffset};

fn main() {
    let today = JalaliDate::today();
    let now = JalaliDateTime::now().new_offset(UtcOffset::IRST);

    println!("Today: {today} ({})", today.strftime("%A %-d %B %Y"));
    println!("Now (Tehran): {now}");
    println!("Gregorian: {}", Utc::now().date_naive());
    println!("JD: {}  AJD: {}", today.jd(), today.ajd());

    let nowruz = JalaliDate::from_civil(today.year() + 1, 1, 1).expect("valid Nowruz");
    println!("Days until Nowruz: {}", nowruz - today);

    if let Ok(parsed) = "۱۴۰۳/۱۲/۳۰".parse::<JalaliDate>() {
        println!("{parsed} is followed by {}", parsed.succ());
        println!("{parsed} = {:?}", parsed.to_gregorian());
    }

    let week = today.upto(today + 6);
    for day in &week {
        println!("  {}", day.strftime("%a %d %b"));
    }
    println!("From chrono: {}", Utc::now().to_jalali());
}
