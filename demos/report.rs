use prayertime::{CalculationRequest, Convention, GeoCoordinate, LegalSchool, Prayertime, Season};

fn main() -> prayertime::Result<()> {
    let cairo = GeoCoordinate::from_degrees(31.2599, 30.0599, 2.0);
    let request = CalculationRequest::from_ymd(cairo, 2010, 8, 6)?
        .with_convention(Convention::EgyptianSurvey)
        .with_school(LegalSchool::Standard)
        .with_season(Season::Summer);

    let mut pt = Prayertime::new(request);
    let qibla = pt.qibla();
    println!("Qibla: {} ({})", qibla.bearing, qibla.compass_point());
    println!("Distance: {}", qibla.distance);

    pt.calculate();
    println!("{}", pt.report()?);
    Ok(())
}
