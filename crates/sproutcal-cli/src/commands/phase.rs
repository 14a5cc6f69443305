use clap::Args;
use sproutcal_core::phase_for;

use super::DataArgs;

#[derive(Args, Debug, Clone)]
pub struct PhaseArgs {
    #[command(flatten)]
    pub data: DataArgs,
}

pub fn run(args: PhaseArgs) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = args.data.resolve()?;
    let phase = phase_for(ctx.date, &ctx.fixture.phases);

    if ctx.json {
        let value = serde_json::json!({ "date": ctx.date, "phase": phase });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{}", phase.map(|p| p.as_str()).unwrap_or("none"));
    }
    Ok(())
}
