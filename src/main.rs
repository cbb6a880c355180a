use tankrig::entry;
use tankrig::error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
