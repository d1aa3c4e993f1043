fn main() {
    spaceship_admin_api::main()
}
